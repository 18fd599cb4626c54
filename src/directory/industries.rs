//! Industry lookup table

pub const INDUSTRIES: &[&str] = &[
    "Agriculture",
    "Automotive",
    "Construction",
    "Consulting",
    "Education",
    "Energy",
    "Entertainment",
    "Finance",
    "Food & Beverage",
    "Healthcare",
    "Hospitality",
    "Insurance",
    "Legal",
    "Logistics",
    "Manufacturing",
    "Media",
    "Real Estate",
    "Retail",
    "Technology",
    "Telecommunications",
    "Transportation",
];

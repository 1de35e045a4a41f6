// Error codes returned in API error bodies

pub mod validation {
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
}

pub mod resource {
    pub const NOT_FOUND: &str = "RESOURCE_2001";
}

pub mod system {
    pub const INTERNAL: &str = "SYSTEM_5001";
    pub const CONFIGURATION: &str = "SYSTEM_5002";
}

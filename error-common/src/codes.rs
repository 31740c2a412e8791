// Standardized error codes surfaced by the CLI and attached to log events

pub mod gateway {
    pub const TRANSPORT_FAILURE: &str = "GATEWAY_1001";
    pub const HTTP_FAILURE: &str = "GATEWAY_1002";
    pub const DECODE_FAILURE: &str = "GATEWAY_1003";
}

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_2001";
}

pub mod session {
    pub const NO_INTAKE: &str = "SESSION_3001";
    pub const NO_DOCTOR_SELECTED: &str = "SESSION_3002";
    pub const STORE_FAILED: &str = "SESSION_3003";
}

pub mod config {
    pub const LOAD_FAILED: &str = "CONFIG_4001";
    pub const INVALID_VALUE: &str = "CONFIG_4002";
}

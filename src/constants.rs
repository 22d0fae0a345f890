// Messages
pub const MESSAGE_OK: &str = "ok";
pub const MESSAGE_CREATED: &str = "Created";
pub const MESSAGE_CAN_NOT_FETCH_DATA: &str = "Can not fetch data";
pub const MESSAGE_CAN_NOT_INSERT_DATA: &str = "Can not insert data";
pub const MESSAGE_CAN_NOT_UPDATE_DATA: &str = "Can not update data";
pub const MESSAGE_CAN_NOT_DELETE_DATA: &str = "Can not delete data";
pub const MESSAGE_VALIDATION_FAILED: &str = "One or more validation errors occurred";
pub const MESSAGE_MALFORMED_REQUEST: &str = "Malformed request body";
pub const MESSAGE_INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const MESSAGE_SERVICE_UNAVAILABLE: &str = "Service Unavailable";

// Misc
pub const EMPTY: &str = "";

// Routes
pub const CLIENT_SCOPE: &str = "/api/client";
pub const POLICY_SCOPE: &str = "/api/policy";

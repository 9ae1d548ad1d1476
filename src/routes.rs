// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const HIGHSCORE: &str = "/highscore/highscore";
pub const HIGHSCORE_BY_NAME: &str = "/highscore/highscore/{name}";
pub const EXAMPLE: &str = "/highscore/example";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

//! Diet MCP Server Implementation
//!
//! Exposes one in-memory session's operations as MCP tools.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::error::NutritionError;
use crate::models::{FoodRecordCreate, Gender};
use crate::session::Session;
use crate::tools::profile::ProfileUpdate;
use crate::tools::status::StatusTracker;
use crate::tools::{foods, intake, profile, recommendations};

/// Diet MCP Service
#[derive(Clone)]
pub struct DietService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<DietService>,
}

impl DietService {
    pub fn new(session: Session) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, Session>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))
    }
}

fn to_mcp_error(e: NutritionError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetupProfileParams {
    /// Age in years
    pub age: Option<i32>,
    /// Gender: "male" or "female" (anything not starting with M is treated as female)
    pub gender: Option<String>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Activity level 1-5 (1 sedentary, 5 very active)
    pub activity_level: Option<i32>,
}

// ============================================================================
// Food Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupFoodParams {
    /// Food name (case-insensitive)
    pub name: String,
}

// ============================================================================
// Intake Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogFoodParams {
    /// Food name (case-insensitive)
    pub name: String,
    /// Amount eaten
    pub quantity: f64,
    /// Weight unit: g (default), mg, kg, oz, lb
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "g".to_string()
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DietService {
    // --- Status ---

    #[tool(description = "Get the current status of the diet service including build info, session counts and process information")]
    fn diet_status(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&self.status_tracker.get_status(&session))
    }

    #[tool(description = "Get step-by-step instructions for setting up a profile and logging food. Call this when starting a session.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Set profile fields (age, gender, weight_kg, height_cm, activity_level 1-5). Omitted fields keep their current value.")]
    fn setup_profile(
        &self,
        Parameters(p): Parameters<SetupProfileParams>,
    ) -> Result<CallToolResult, McpError> {
        let update = ProfileUpdate {
            age: p.age,
            gender: p.gender.as_deref().map(Gender::from_input),
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            activity_level: p.activity_level,
        };
        let mut session = self.session()?;
        json_result(&profile::setup_profile(&mut session, update))
    }

    #[tool(description = "Get the current profile and whether it is complete")]
    fn get_profile(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&profile::get_profile(&session))
    }

    #[tool(description = "Calculate BMR, daily calorie needs and weight loss/maintenance/gain targets (requires a complete profile)")]
    fn calculate_calories(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = profile::calculate_calories(&session).map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "Calculate BMI and its weight category (requires weight and height)")]
    fn calculate_bmi(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = profile::calculate_bmi(&session).map_err(to_mcp_error)?;
        json_result(&result)
    }

    // --- Foods ---

    #[tool(description = "List all reference foods with calories per 100 g")]
    fn list_foods(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&foods::list_foods(&session))
    }

    #[tool(description = "Get full per-100g nutrition for a food by name. Lists available foods if not found.")]
    fn lookup_food(
        &self,
        Parameters(p): Parameters<LookupFoodParams>,
    ) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        match foods::lookup_food(&session, &p.name) {
            Ok(detail) => json_result(&detail),
            Err(not_found) => json_result(&not_found),
        }
    }

    #[tool(description = "Add a new reference food with nutrition per 100 g. Names must be unique (case-insensitive).")]
    fn add_food(
        &self,
        Parameters(data): Parameters<FoodRecordCreate>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = foods::add_food(&mut session, data).map_err(to_mcp_error)?;
        json_result(&result)
    }

    // --- Intake ---

    #[tool(description = "Log a portion of a reference food to today's intake")]
    fn log_food(
        &self,
        Parameters(p): Parameters<LogFoodParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = intake::log_food_in_unit(&mut session, &p.name, p.quantity, &p.unit)
            .map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "View today's logged foods with calories and the running total")]
    fn view_intake(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&intake::view_intake(&session))
    }

    #[tool(description = "Clear all of today's logged foods")]
    fn clear_intake(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        json_result(&intake::clear_intake(&mut session))
    }

    #[tool(description = "Detailed nutrition totals for today (macros, vitamins, minerals, omega-3) with approximate daily value percentages")]
    fn nutrition_summary(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&intake::nutrition_summary(&session))
    }

    // --- Recommendations ---

    #[tool(description = "Meal calorie distribution, sample meal combinations and nutrition tips (requires a complete profile)")]
    fn meal_recommendations(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = recommendations::meal_recommendations(&session).map_err(to_mcp_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DietService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "personal-diet".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Personal Diet Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Personal Diet Tracker - profile metrics, food logging and daily nutrition \
                 summaries. \
                 Call usage_instructions first. \
                 Profile: setup_profile/get_profile, calculate_calories, calculate_bmi. \
                 Foods: list_foods/lookup_food/add_food. \
                 Intake: log_food/view_intake/clear_intake, nutrition_summary. \
                 Planning: meal_recommendations. \
                 State lives in memory for the lifetime of the server."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::G_PER_OZ;

    fn service() -> DietService {
        DietService::new(Session::default())
    }

    #[test]
    fn test_add_food_keeps_every_nutrient() {
        let service = service();
        let data: FoodRecordCreate = serde_json::from_str(
            r#"{"name": "Tofu", "calories": 76, "protein": 8, "carbs": 1.9, "fat": 4.8,
                "calcium": 350, "iron": 5.4, "magnesium": 30, "zinc": 0.8, "folate": 15}"#,
        )
        .unwrap();
        assert!(service.add_food(Parameters(data)).is_ok());

        let session = service.session().unwrap();
        let tofu = session.lookup_food("tofu").unwrap();
        let per_100g = tofu.per_100g();
        assert_eq!(per_100g.calcium, 350.0);
        assert_eq!(per_100g.iron, 5.4);
        assert_eq!(per_100g.magnesium, 30.0);
        assert_eq!(per_100g.zinc, 0.8);
        assert_eq!(per_100g.folate, 15.0);
        assert_eq!(per_100g.potassium, 0.0);
    }

    #[test]
    fn test_add_food_rejects_duplicate() {
        let service = service();
        let data = FoodRecordCreate::new("APPLE", 1.0, 1.0, 1.0, 1.0);
        assert!(service.add_food(Parameters(data)).is_err());
        assert_eq!(service.session().unwrap().reference.len(), 12);
    }

    #[test]
    fn test_log_food_converts_units() {
        let service = service();
        let params = LogFoodParams {
            name: "Salmon".to_string(),
            quantity: 4.0,
            unit: "oz".to_string(),
        };
        assert!(service.log_food(Parameters(params)).is_ok());

        let session = service.session().unwrap();
        let entry = &session.ledger.entries()[0];
        assert!((entry.quantity_grams - 4.0 * G_PER_OZ).abs() < 1e-9);
        assert!((session.summarize().totals.omega3 - 1.8 * 4.0 * G_PER_OZ / 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_food_defaults_to_grams() {
        let service = service();
        let params: LogFoodParams =
            serde_json::from_str(r#"{"name": "rice", "quantity": 150}"#).unwrap();
        assert_eq!(params.unit, "g");
        assert!(service.log_food(Parameters(params)).is_ok());
        let session = service.session().unwrap();
        assert!((session.ledger.total_calories() - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_food_rejects_bad_input() {
        let service = service();
        let bad_unit = LogFoodParams {
            name: "rice".to_string(),
            quantity: 1.0,
            unit: "cup".to_string(),
        };
        assert!(service.log_food(Parameters(bad_unit)).is_err());
        let unknown = LogFoodParams {
            name: "kiwi".to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
        };
        assert!(service.log_food(Parameters(unknown)).is_err());
        assert!(service.session().unwrap().ledger.is_empty());
    }
}

use serde::Deserialize;

use crate::domain::entities::work_item::{
    CreateWorkItem, CustomFields, DEFAULT_WORK_ITEM_TYPE, UpdateWorkItem,
};
use crate::domain::value_objects::ids::WorkItemId;
use crate::interface::http::envelope::ValidationErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub work_item_type: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<i32>,
    pub custom_fields: Option<CustomFields>,
}

impl CreateWorkItemRequest {
    /// Checks required fields and applies defaults.
    pub fn validate(self) -> Result<CreateWorkItem, ValidationErrors> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => {
                let mut errors = ValidationErrors::default();
                errors.add("title", "title is required");
                return Err(errors);
            }
        };

        Ok(CreateWorkItem {
            title,
            description: self.description,
            work_item_type: self
                .work_item_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_WORK_ITEM_TYPE.to_string()),
            assigned_to: self.assigned_to,
            priority: self.priority,
            custom_fields: self.custom_fields.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemRequest {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<i32>,
    pub custom_fields: Option<CustomFields>,
}

impl UpdateWorkItemRequest {
    pub fn validate(self) -> Result<UpdateWorkItem, ValidationErrors> {
        let Some(id) = self.id else {
            let mut errors = ValidationErrors::default();
            errors.add("id", "id is required");
            return Err(errors);
        };

        Ok(UpdateWorkItem {
            id: WorkItemId(id),
            title: self.title,
            description: self.description,
            state: self.state,
            assigned_to: self.assigned_to,
            priority: self.priority,
            custom_fields: self.custom_fields.unwrap_or_default(),
        })
    }
}

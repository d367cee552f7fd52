use alcove_vault::activity::{ActivityEntry, NewActivity};

use crate::{AlcoveService, ServiceResult};

pub type AddActivityRequest = NewActivity;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AddActivityResponse {
	pub entry: ActivityEntry,
}

impl AlcoveService {
	/// All feed entries, newest first.
	pub fn activity_feed(&self) -> ServiceResult<Vec<ActivityEntry>> {
		Ok(self.activity.load()?)
	}

	pub fn add_activity(&self, req: AddActivityRequest) -> ServiceResult<AddActivityResponse> {
		let entry = self.activity.append(req)?;

		Ok(AddActivityResponse { entry })
	}
}

use crate::{
    domain::common::{EatitudeConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::ArkLLMClient,
};

pub type EatitudeService = Service<ArkLLMClient>;

pub fn create_service(config: EatitudeConfig) -> Result<EatitudeService, CoreError> {
    let llm_client = ArkLLMClient::new(&config.llm)?;

    Ok(Service::new(llm_client))
}

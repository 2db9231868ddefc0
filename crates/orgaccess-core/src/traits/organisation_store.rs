use crate::errors::AccessResult;
use crate::models::{Organisation, OrganisationId};

pub trait IOrganisationStore: Send + Sync {
    fn get_organisation(&self, id: &OrganisationId) -> AccessResult<Option<Organisation>>;
}

use calc_sdk::Constant;

use crate::infra::storage::entity::Model as ConstantEntity;

impl From<ConstantEntity> for Constant {
    fn from(e: ConstantEntity) -> Self {
        Self {
            name: e.name,
            value: e.value,
        }
    }
}

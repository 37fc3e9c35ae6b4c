pub mod request;
pub mod response;

pub use request::RegisterSkuRequest;
pub use response::RegisterSkuResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct RegisterMissingSku;

impl UseCaseMetadata for RegisterMissingSku {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "register_missing_sku"
    }

    fn display_name() -> &'static str {
        "Adicionar SKUs Faltantes"
    }

    fn description() -> &'static str {
        "Регистрация SKU, не найденных при последнем импорте, с привязкой к существующему родительскому товару"
    }
}

pub mod request;
pub mod response;
pub mod row;

pub use request::ImportSalesRequest;
pub use response::{ImportPreview, ImportSalesResponse};
pub use row::SaleRow;

use crate::usecases::common::UseCaseMetadata;

pub struct ImportSales;

impl UseCaseMetadata for ImportSales {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_sales"
    }

    fn display_name() -> &'static str {
        "Importar e Processar Vendas"
    }

    fn description() -> &'static str {
        "Импорт выгрузки продаж маркетплейса: дедупликация по ID заказа, расчёт себестоимости и прибыли"
    }
}

use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Проводка журнала продаж (агрегат a004)
///
/// Создаётся только импортом и больше не изменяется. Себестоимость фиксируется
/// на момент импорта и не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// ID заказа маркетплейса, ключ дедупликации
    #[serde(rename = "orderId")]
    pub order_id: String,

    /// Дата заказа в том виде, в каком она пришла из файла
    #[serde(rename = "orderDate")]
    pub order_date: String,

    /// Код платформы (см. enums::Platform)
    pub platform: String,

    pub sku: String,

    /// Количество (> 0)
    pub quantity: i32,

    /// Цена за единицу
    #[serde(rename = "grossRevenuePerUnit")]
    pub gross_revenue_per_unit: Decimal,

    #[serde(rename = "totalCoupons")]
    pub total_coupons: Decimal,

    #[serde(rename = "marketplaceFees")]
    pub marketplace_fees: Decimal,

    #[serde(rename = "shippingCost")]
    pub shipping_cost: Decimal,

    #[serde(rename = "netSaleValue")]
    pub net_sale_value: Decimal,

    /// Себестоимость набора на момент импорта
    #[serde(rename = "computedCost")]
    pub computed_cost: Decimal,

    #[serde(rename = "netProfit")]
    pub net_profit: Decimal,

    #[serde(rename = "importedAt")]
    pub imported_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Валовая выручка строки
    pub fn gross_revenue(&self) -> Decimal {
        self.gross_revenue_per_unit
            .saturating_mul(Decimal::from(self.quantity))
    }

    /// Себестоимость всех единиц строки
    pub fn total_product_cost(&self) -> Decimal {
        self.computed_cost.saturating_mul(Decimal::from(self.quantity))
    }
}

impl AggregateRoot for LedgerEntry {
    type Id = String;
    fn id(&self) -> Self::Id {
        self.order_id.clone()
    }
    fn aggregate_index() -> &'static str {
        "a004"
    }
    fn collection_name() -> &'static str {
        "sales_ledger"
    }
    fn element_name() -> &'static str {
        "Lançamento de venda"
    }
    fn list_name() -> &'static str {
        "Lançamentos de vendas"
    }
}

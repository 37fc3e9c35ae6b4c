use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Нормализованная строка выгрузки продаж
///
/// Набор полей фиксирован; неизвестные колонки отбрасываются при нормализации,
/// отсутствующие числовые колонки заполняются нулями.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaleRow {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    pub sku: String,
    pub quantity: Decimal,
    #[serde(rename = "unitPrice")]
    pub unit_price: Decimal,
    #[serde(rename = "commissionFee")]
    pub commission_fee: Decimal,
    #[serde(rename = "serviceFee")]
    pub service_fee: Decimal,
    #[serde(rename = "transactionFee")]
    pub transaction_fee: Decimal,
    #[serde(rename = "sellerCoupon")]
    pub seller_coupon: Decimal,
    #[serde(rename = "marketplaceCoupon")]
    pub marketplace_coupon: Decimal,
    #[serde(rename = "platformRefund")]
    pub platform_refund: Decimal,
    #[serde(rename = "shippingCost")]
    pub shipping_cost: Decimal,
}

//! Приведение сырой таблицы выгрузки к каноническим строкам продаж

use super::raw_table::RawTable;
use crate::shared::money::parse_decimal_lenient;
use contracts::enums::Platform;
use contracts::usecases::u501_import_sales::SaleRow;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    OrderId,
    OrderDate,
    Sku,
    Quantity,
    UnitPrice,
    CommissionFee,
    ServiceFee,
    TransactionFee,
    SellerCoupon,
    MarketplaceCoupon,
    PlatformRefund,
    ShippingCost,
}

/// Заголовки выгрузки Shopee (pt-BR) -> канонические поля
static HEADER_INDEX: Lazy<HashMap<&'static str, CanonicalField>> = Lazy::new(|| {
    use CanonicalField::*;
    HashMap::from([
        ("ID do pedido", OrderId),
        ("Data de criação do pedido", OrderDate),
        ("Número de referência SKU", Sku),
        ("Quantidade", Quantity),
        ("Preço acordado", UnitPrice),
        ("Taxa de comissão", CommissionFee),
        ("Taxa de serviço", ServiceFee),
        ("Taxa de transação", TransactionFee),
        ("Cupom do vendedor", SellerCoupon),
        ("Cupom Shopee", MarketplaceCoupon),
        ("Reembolso Shopee", PlatformRefund),
        ("Custo de envio", ShippingCost),
    ])
});

/// Без этих трёх заголовков выгрузка не считается выгрузкой Shopee
const SHOPEE_SIGNATURE: [&str; 3] = ["ID do pedido", "Taxa de comissão", "Taxa de serviço"];

impl CanonicalField {
    pub fn from_header(header: &str) -> Option<Self> {
        HEADER_INDEX.get(header.trim()).copied()
    }
}

/// Позиции распознанных колонок в исходной таблице
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    positions: HashMap<CanonicalField, usize>,
    pub recognized: Vec<String>,
    pub dropped: Vec<String>,
}

impl ColumnMapping {
    /// При повторе заголовка побеждает самая левая колонка
    pub fn from_headers(headers: &[String]) -> Self {
        let mut mapping = ColumnMapping::default();
        for (idx, header) in headers.iter().enumerate() {
            match CanonicalField::from_header(header) {
                Some(field) if !mapping.positions.contains_key(&field) => {
                    mapping.positions.insert(field, idx);
                    mapping.recognized.push(header.clone());
                }
                _ => mapping.dropped.push(header.clone()),
            }
        }
        mapping
    }

    fn text<'a>(&self, row: &'a [String], field: CanonicalField) -> &'a str {
        self.positions
            .get(&field)
            .and_then(|&idx| row.get(idx))
            .map(|s| s.trim())
            .unwrap_or_default()
    }

    fn number(&self, row: &[String], field: CanonicalField) -> Decimal {
        parse_decimal_lenient(self.text(row, field))
    }

    fn to_sale_row(&self, row: &[String]) -> SaleRow {
        use CanonicalField::*;
        SaleRow {
            order_id: self.text(row, OrderId).to_string(),
            order_date: self.text(row, OrderDate).to_string(),
            sku: self.text(row, Sku).to_string(),
            quantity: self.number(row, Quantity),
            unit_price: self.number(row, UnitPrice),
            commission_fee: self.number(row, CommissionFee),
            service_fee: self.number(row, ServiceFee),
            transaction_fee: self.number(row, TransactionFee),
            seller_coupon: self.number(row, SellerCoupon),
            marketplace_coupon: self.number(row, MarketplaceCoupon),
            platform_refund: self.number(row, PlatformRefund),
            shipping_cost: self.number(row, ShippingCost),
        }
    }
}

/// Все строки таблицы в каноническом виде; недостающие числа = 0
pub fn normalize(table: &RawTable) -> Vec<SaleRow> {
    let mapping = ColumnMapping::from_headers(&table.headers);
    if !mapping.dropped.is_empty() {
        tracing::debug!("Dropped columns: {:?}", mapping.dropped);
    }
    table.rows.iter().map(|r| mapping.to_sale_row(r)).collect()
}

pub fn detect_platform(headers: &[String]) -> Option<Platform> {
    let is_shopee = SHOPEE_SIGNATURE
        .iter()
        .all(|sig| headers.iter().any(|h| h.trim() == *sig));
    is_shopee.then_some(Platform::Shopee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn maps_known_headers_and_drops_the_rest() {
        let t = table(
            &["ID do pedido", "Status do pedido", "Número de referência SKU", "Quantidade"],
            &[&["O1", "Concluído", " SKU-A ", "2"]],
        );
        let mapping = ColumnMapping::from_headers(&t.headers);
        assert_eq!(mapping.dropped, vec!["Status do pedido"]);

        let rows = normalize(&t);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_id, "O1");
        assert_eq!(rows[0].sku, "SKU-A");
        assert_eq!(rows[0].quantity, Decimal::from(2));
    }

    #[test]
    fn padded_headers_still_map() {
        let t = table(
            &["  ID do pedido", "Número de referência SKU\t", " Quantidade ", "Preço acordado  "],
            &[&["O7", "SKU-B", "3", "12,50"]],
        );
        let mapping = ColumnMapping::from_headers(&t.headers);
        assert_eq!(mapping.recognized.len(), 4);
        assert!(mapping.dropped.is_empty());

        let rows = normalize(&t);
        assert_eq!(rows[0].order_id, "O7");
        assert_eq!(rows[0].sku, "SKU-B");
        assert_eq!(rows[0].quantity, Decimal::from(3));
        assert_eq!(rows[0].unit_price, Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn missing_and_garbage_numbers_are_zero() {
        let t = table(
            &["ID do pedido", "Preço acordado", "Taxa de comissão"],
            &[&["O1", "abc", ""], &["O2"]],
        );
        let rows = normalize(&t);
        for row in &rows {
            assert_eq!(row.unit_price, Decimal::ZERO);
            assert_eq!(row.commission_fee, Decimal::ZERO);
            assert_eq!(row.service_fee, Decimal::ZERO);
            assert_eq!(row.shipping_cost, Decimal::ZERO);
        }
        assert_eq!(rows[1].sku, "");
    }

    #[test]
    fn comma_decimals_are_understood() {
        let t = table(&["ID do pedido", "Preço acordado"], &[&["O1", "5309,00"]]);
        assert_eq!(normalize(&t)[0].unit_price, Decimal::from_str("5309").unwrap());
    }

    #[test]
    fn leftmost_duplicate_header_wins() {
        let t = table(&["Quantidade", "Quantidade"], &[&["3", "9"]]);
        let mapping = ColumnMapping::from_headers(&t.headers);
        assert_eq!(mapping.recognized, vec!["Quantidade"]);
        assert_eq!(mapping.dropped, vec!["Quantidade"]);
        assert_eq!(normalize(&t)[0].quantity, Decimal::from(3));
    }

    #[test]
    fn shopee_is_detected_by_signature_headers() {
        let headers: Vec<String> = ["ID do pedido", "Taxa de comissão", " Taxa de serviço "]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(detect_platform(&headers), Some(Platform::Shopee));
        assert_eq!(detect_platform(&headers[..2]), None);
    }
}

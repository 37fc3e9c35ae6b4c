//! Производные суммы по строке продажи
//!
//! Вся арифметика checked: переполнение даёт `None`, и строка считается невалидной.

use contracts::usecases::u501_import_sales::SaleRow;
use rust_decimal::Decimal;

/// Строка с посчитанными комиссиями и купонами (не зависят от себестоимости)
#[derive(Debug, Clone, PartialEq)]
pub struct PricedRow {
    pub row: SaleRow,
    pub marketplace_fees: Decimal,
    /// Купоны продавца и площадки плюс возврат платформы
    pub total_coupons: Decimal,
}

/// Выручка и прибыль строки при известной себестоимости комплекта
#[derive(Debug, Clone, PartialEq)]
pub struct Profit {
    pub gross_revenue: Decimal,
    pub net_sale_value: Decimal,
    pub total_product_cost: Decimal,
    pub net_profit: Decimal,
}

pub fn compute_aggregates(row: SaleRow) -> Option<PricedRow> {
    let marketplace_fees = row
        .commission_fee
        .checked_add(row.service_fee)?
        .checked_add(row.transaction_fee)?;
    let total_coupons = row
        .seller_coupon
        .checked_add(row.marketplace_coupon)?
        .checked_add(row.platform_refund)?;
    Some(PricedRow {
        row,
        marketplace_fees,
        total_coupons,
    })
}

/// Количество в ledger хранится целым, поэтому дробная часть отбрасывается
pub fn whole_quantity(row: &SaleRow) -> Decimal {
    row.quantity.trunc()
}

impl PricedRow {
    /// netSaleValue = gross - coupons - fees; netProfit = net - cost * qty (- shipping)
    pub fn profit(&self, unit_cost: Decimal, subtract_shipping: bool) -> Option<Profit> {
        let quantity = whole_quantity(&self.row);
        let gross_revenue = self.row.unit_price.checked_mul(quantity)?;
        let net_sale_value = gross_revenue
            .checked_sub(self.total_coupons)?
            .checked_sub(self.marketplace_fees)?;
        let total_product_cost = unit_cost.checked_mul(quantity)?;
        let mut net_profit = net_sale_value.checked_sub(total_product_cost)?;
        if subtract_shipping {
            net_profit = net_profit.checked_sub(self.row.shipping_cost)?;
        }
        Some(Profit {
            gross_revenue,
            net_sale_value,
            total_product_cost,
            net_profit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row() -> SaleRow {
        SaleRow {
            order_id: "O1".into(),
            sku: "SKU-A".into(),
            quantity: dec("2"),
            unit_price: dec("50"),
            commission_fee: dec("10"),
            service_fee: dec("2"),
            transaction_fee: dec("0.5"),
            seller_coupon: dec("3"),
            marketplace_coupon: dec("1"),
            platform_refund: dec("0"),
            ..Default::default()
        }
    }

    fn priced(r: SaleRow) -> PricedRow {
        compute_aggregates(r).unwrap()
    }

    #[test]
    fn fees_and_coupons_are_summed() {
        let mut r = row();
        r.platform_refund = dec("2");
        let priced = priced(r);
        assert_eq!(priced.marketplace_fees, dec("12.5"));
        assert_eq!(priced.total_coupons, dec("6"));
    }

    #[test]
    fn canonical_profit() {
        let p = priced(row()).profit(dec("25"), true).unwrap();
        assert_eq!(p.gross_revenue, dec("100"));
        assert_eq!(p.net_sale_value, dec("83.5"));
        assert_eq!(p.total_product_cost, dec("50"));
        assert_eq!(p.net_profit, dec("33.5"));
    }

    #[test]
    fn coupons_and_refund_reduce_net_sale_value() {
        let mut r = row();
        r.platform_refund = dec("7");
        r.seller_coupon = dec("10");
        let p = priced(r).profit(dec("25"), true).unwrap();
        // 100 - (10 + 1 + 7) - 12.5
        assert_eq!(p.net_sale_value, dec("69.5"));
        assert_eq!(p.net_profit, dec("19.5"));
    }

    #[test]
    fn shipping_only_subtracted_when_enabled() {
        let mut r = row();
        r.shipping_cost = dec("8");
        let priced = priced(r);
        assert_eq!(priced.profit(dec("25"), true).unwrap().net_profit, dec("25.5"));
        assert_eq!(priced.profit(dec("25"), false).unwrap().net_profit, dec("33.5"));
    }

    #[test]
    fn fractional_quantity_is_truncated() {
        let mut r = row();
        r.quantity = dec("2.9");
        let p = priced(r).profit(dec("25"), false).unwrap();
        assert_eq!(p.gross_revenue, dec("100"));
    }

    #[test]
    fn overflow_yields_none() {
        let mut r = row();
        r.unit_price = Decimal::MAX;
        assert!(priced(r).profit(dec("25"), false).is_none());

        let mut r = row();
        r.commission_fee = Decimal::MAX;
        r.service_fee = Decimal::MAX;
        assert!(compute_aggregates(r).is_none());

        assert!(priced(row()).profit(Decimal::MAX, false).is_none());
    }
}

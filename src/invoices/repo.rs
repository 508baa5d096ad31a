use serde::{Deserialize, Serialize};
use sqlx::{types::Decimal, FromRow, PgPool};
use time::Date;

/// Invoice row. Every column except the generated id is nullable; the
/// store is the only layer enforcing anything about the values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub zakazka_id: Option<i32>,
    pub invoice_type_id: Option<i32>,
    pub issue_date: Option<Date>,
    pub due_date: Option<Date>,
    pub amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Field set accepted on create and update. Absent fields become NULL
/// rather than being rejected.
#[derive(Debug, Deserialize)]
pub struct InvoiceFields {
    pub zakazka_id: Option<i32>,
    pub invoice_type_id: Option<i32>,
    pub issue_date: Option<Date>,
    pub due_date: Option<Date>,
    pub amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl Invoice {
    pub async fn create(db: &PgPool, f: InvoiceFields) -> sqlx::Result<Invoice> {
        sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices
                (zakazka_id, invoice_type_id, issue_date, due_date, amount,
                 payment_method, status, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(f.zakazka_id)
        .bind(f.invoice_type_id)
        .bind(f.issue_date)
        .bind(f.due_date)
        .bind(f.amount)
        .bind(f.payment_method)
        .bind(f.status)
        .bind(f.description)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Invoice>> {
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices")
            .fetch_all(db)
            .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Full overwrite; a miss returns `None` and mutates nothing.
    pub async fn update(db: &PgPool, id: i32, f: InvoiceFields) -> sqlx::Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET zakazka_id = $1, invoice_type_id = $2, issue_date = $3, due_date = $4,
                amount = $5, payment_method = $6, status = $7, description = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(f.zakazka_id)
        .bind(f.invoice_type_id)
        .bind(f.issue_date)
        .bind(f.due_date)
        .bind(f.amount)
        .bind(f.payment_method)
        .bind(f.status)
        .bind(f.description)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i32) -> sqlx::Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>("DELETE FROM invoices WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_deserializes_to_all_nulls() {
        let f: InvoiceFields = serde_json::from_str("{}").expect("deserialize");
        assert!(f.zakazka_id.is_none());
        assert!(f.issue_date.is_none());
        assert!(f.amount.is_none());
        assert!(f.description.is_none());
    }

    #[test]
    fn numeric_fields_accept_json_numbers_and_strings() {
        let f: InvoiceFields =
            serde_json::from_str(r#"{"amount": 1500.50, "zakazka_id": 3}"#).expect("deserialize");
        assert_eq!(f.amount, Some(Decimal::new(150050, 2)));
        assert_eq!(f.zakazka_id, Some(3));

        let f: InvoiceFields =
            serde_json::from_str(r#"{"amount": "1500.50"}"#).expect("deserialize");
        assert_eq!(f.amount, Some(Decimal::new(150050, 2)));
    }

    #[test]
    fn dates_parse_from_iso_strings() {
        let f: InvoiceFields =
            serde_json::from_str(r#"{"issue_date": "2024-03-01", "due_date": "2024-03-15"}"#)
                .expect("deserialize");
        assert_eq!(f.issue_date, Some(time::macros::date!(2024 - 03 - 01)));
        assert_eq!(f.due_date, Some(time::macros::date!(2024 - 03 - 15)));
    }
}

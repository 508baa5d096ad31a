use serde::{Deserialize, Serialize};
use sqlx::{types::Decimal, FromRow, PgPool};

/// Work order ("zakazka") row. The three price columns are supplied
/// independently by the caller; nothing recomputes cena_s_dph from
/// cena_bez_dph and dph.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Zakazka {
    pub id: i32,
    pub nazev: Option<String>,
    pub adresa: Option<String>,
    pub cena_bez_dph: Option<Decimal>,
    pub dph: Option<Decimal>,
    pub cena_s_dph: Option<Decimal>,
    pub stav: Option<String>,
    pub zisk: Option<Decimal>,
    pub stavebni_denik: Option<String>,
}

/// Field set accepted on create and update. Absent fields become NULL
/// rather than being rejected.
#[derive(Debug, Deserialize)]
pub struct ZakazkaFields {
    pub nazev: Option<String>,
    pub adresa: Option<String>,
    pub cena_bez_dph: Option<Decimal>,
    pub dph: Option<Decimal>,
    pub cena_s_dph: Option<Decimal>,
    pub stav: Option<String>,
    pub zisk: Option<Decimal>,
    pub stavebni_denik: Option<String>,
}

impl Zakazka {
    pub async fn create(db: &PgPool, f: ZakazkaFields) -> sqlx::Result<Zakazka> {
        sqlx::query_as::<_, Zakazka>(
            r#"
            INSERT INTO zakazky
                (nazev, adresa, cena_bez_dph, dph, cena_s_dph, stav, zisk, stavebni_denik)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(f.nazev)
        .bind(f.adresa)
        .bind(f.cena_bez_dph)
        .bind(f.dph)
        .bind(f.cena_s_dph)
        .bind(f.stav)
        .bind(f.zisk)
        .bind(f.stavebni_denik)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Zakazka>> {
        sqlx::query_as::<_, Zakazka>("SELECT * FROM zakazky")
            .fetch_all(db)
            .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<Zakazka>> {
        sqlx::query_as::<_, Zakazka>("SELECT * FROM zakazky WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Full overwrite; a miss returns `None` and mutates nothing.
    pub async fn update(db: &PgPool, id: i32, f: ZakazkaFields) -> sqlx::Result<Option<Zakazka>> {
        sqlx::query_as::<_, Zakazka>(
            r#"
            UPDATE zakazky
            SET nazev = $1, adresa = $2, cena_bez_dph = $3, dph = $4,
                cena_s_dph = $5, stav = $6, zisk = $7, stavebni_denik = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(f.nazev)
        .bind(f.adresa)
        .bind(f.cena_bez_dph)
        .bind(f.dph)
        .bind(f.cena_s_dph)
        .bind(f.stav)
        .bind(f.zisk)
        .bind(f.stavebni_denik)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i32) -> sqlx::Result<Option<Zakazka>> {
        sqlx::query_as::<_, Zakazka>("DELETE FROM zakazky WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body_deserializes() {
        let f: ZakazkaFields = serde_json::from_str(
            r#"{
                "nazev": "Roof",
                "adresa": "X",
                "cena_bez_dph": 100,
                "dph": 21,
                "cena_s_dph": 121,
                "stav": "open",
                "zisk": 10,
                "stavebni_denik": "log1"
            }"#,
        )
        .expect("deserialize");
        assert_eq!(f.nazev.as_deref(), Some("Roof"));
        assert_eq!(f.cena_bez_dph, Some(Decimal::from(100)));
        assert_eq!(f.cena_s_dph, Some(Decimal::from(121)));
        assert_eq!(f.stavebni_denik.as_deref(), Some("log1"));
    }

    #[test]
    fn partial_body_leaves_rest_null() {
        let f: ZakazkaFields =
            serde_json::from_str(r#"{"nazev": "Fence"}"#).expect("deserialize");
        assert_eq!(f.nazev.as_deref(), Some("Fence"));
        assert!(f.adresa.is_none());
        assert!(f.dph.is_none());
        assert!(f.zisk.is_none());
    }

    #[test]
    fn row_serializes_all_fields() {
        let row = Zakazka {
            id: 5,
            nazev: Some("Roof".into()),
            adresa: None,
            cena_bez_dph: Some(Decimal::from(100)),
            dph: Some(Decimal::from(21)),
            cena_s_dph: Some(Decimal::from(121)),
            stav: Some("open".into()),
            zisk: None,
            stavebni_denik: None,
        };
        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json["id"], 5);
        assert_eq!(json["nazev"], "Roof");
        assert!(json["adresa"].is_null());
        assert!(json.get("stavebni_denik").is_some());
    }
}

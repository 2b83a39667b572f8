//! Repository for the `reservations` table.

use sqlx::PgPool;
use yoyaku_core::flag;
use yoyaku_core::pagination::{clamp_page, clamp_per_page, offset};
use yoyaku_core::reservation::{derive_name, Status};

use crate::models::reservation::{
    CreateReservation, Reservation, ReservationListParams, UpdateReservation,
};

/// Column list for reservations queries.
const COLUMNS: &str = "id, date, program, slot, room, name, contact, note, status, \
    start_at, end_at, last_name, first_name, email, phone, notebook_type, \
    has_certificate, created_at, updated_at";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Create a new reservation, returning the created row.
    ///
    /// The certificate flag is coerced into its stored `"0"`/`"1"` form and
    /// the display name is derived from the name parts when absent, both
    /// before the INSERT.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let name = derive_name(
            input.name.as_deref(),
            input.last_name.as_deref(),
            input.first_name.as_deref(),
        );
        let status = input.status.as_deref().unwrap_or(Status::BOOKED);
        let has_certificate = match &input.has_certificate {
            Some(value) => flag::coerce_stored(value),
            None => flag::STORED_FALSE,
        };

        let query = format!(
            "INSERT INTO reservations
                (date, program, slot, room, name, contact, note, status,
                 start_at, end_at, last_name, first_name, email, phone,
                 notebook_type, has_certificate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.date)
            .bind(&input.program)
            .bind(&input.slot)
            .bind(&input.room)
            .bind(&name)
            .bind(&input.contact)
            .bind(&input.note)
            .bind(status)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.notebook_type)
            .bind(has_certificate)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations matching the optional filters, ordered by date and
    /// slot, paginated.
    pub async fn list(
        pool: &PgPool,
        params: &ReservationListParams,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE ($1::date IS NULL OR date = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::text IS NULL OR program = $3)
             ORDER BY date, slot, id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(params.date)
            .bind(&params.status)
            .bind(&params.program)
            .bind(per_page)
            .bind(offset(page, per_page))
            .fetch_all(pool)
            .await
    }

    /// Count reservations matching the optional filters.
    pub async fn count(
        pool: &PgPool,
        params: &ReservationListParams,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations
             WHERE ($1::date IS NULL OR date = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::text IS NULL OR program = $3)",
        )
        .bind(params.date)
        .bind(&params.status)
        .bind(&params.program)
        .fetch_one(pool)
        .await
    }

    /// Partially update a reservation, returning the updated row.
    ///
    /// Reads the current row, overlays the supplied fields in memory,
    /// re-derives the display name on the merged record, then writes the
    /// full column set back in a single UPDATE. Returns `Ok(None)` when the
    /// id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let merged = merge(current, input);

        let query = format!(
            "UPDATE reservations SET
                date = $2, program = $3, slot = $4, room = $5, name = $6,
                contact = $7, note = $8, status = $9, start_at = $10,
                end_at = $11, last_name = $12, first_name = $13, email = $14,
                phone = $15, notebook_type = $16, has_certificate = $17,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(merged.date)
            .bind(&merged.program)
            .bind(&merged.slot)
            .bind(&merged.room)
            .bind(&merged.name)
            .bind(&merged.contact)
            .bind(&merged.note)
            .bind(&merged.status)
            .bind(merged.start_at)
            .bind(merged.end_at)
            .bind(&merged.last_name)
            .bind(&merged.first_name)
            .bind(&merged.email)
            .bind(&merged.phone)
            .bind(&merged.notebook_type)
            .bind(&merged.has_certificate)
            .fetch_optional(pool)
            .await
    }
}

/// Overlay a partial update onto the current row and apply the pre-save
/// steps: certificate coercion and name derivation.
fn merge(mut current: Reservation, input: &UpdateReservation) -> Reservation {
    if let Some(date) = input.date {
        current.date = date;
    }
    if let Some(ref program) = input.program {
        current.program = program.clone();
    }
    if let Some(ref slot) = input.slot {
        current.slot = slot.clone();
    }
    if input.room.is_some() {
        current.room = input.room.clone();
    }
    if let Some(ref name) = input.name {
        current.name = name.clone();
    }
    if input.contact.is_some() {
        current.contact = input.contact.clone();
    }
    if input.note.is_some() {
        current.note = input.note.clone();
    }
    if let Some(ref status) = input.status {
        current.status = status.clone();
    }
    if input.start_at.is_some() {
        current.start_at = input.start_at;
    }
    if input.end_at.is_some() {
        current.end_at = input.end_at;
    }
    if input.last_name.is_some() {
        current.last_name = input.last_name.clone();
    }
    if input.first_name.is_some() {
        current.first_name = input.first_name.clone();
    }
    if input.email.is_some() {
        current.email = input.email.clone();
    }
    if input.phone.is_some() {
        current.phone = input.phone.clone();
    }
    if input.notebook_type.is_some() {
        current.notebook_type = input.notebook_type.clone();
    }
    if let Some(ref value) = input.has_certificate {
        current.has_certificate = flag::coerce_stored(value).to_string();
    }

    current.name = derive_name(
        Some(&current.name),
        current.last_name.as_deref(),
        current.first_name.as_deref(),
    );
    current
}

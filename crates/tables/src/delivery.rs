//! Deliveries and the notifications they trigger.
use courier_pg::*;

/// Individual parcels on a tour.
pub struct Deliveries;

/// SMS and push messages sent about a delivery.
pub struct Notifications;

impl Schema for Deliveries {
    fn name() -> &'static str {
        DELIVERIES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            DELIVERIES,
            " (
                id           BIGSERIAL PRIMARY KEY,
                tour_id      BIGINT,
                customer_id  BIGINT       NOT NULL,
                address      TEXT         NOT NULL,
                latitude     DOUBLE PRECISION,
                longitude    DOUBLE PRECISION,
                due_at       TIMESTAMPTZ,
                urgent       BOOLEAN      NOT NULL DEFAULT FALSE,
                status       VARCHAR(16)  NOT NULL DEFAULT 'pending',
                proof_url    TEXT,
                delivered_at TIMESTAMPTZ
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX idx_",
            DELIVERIES,
            "_tour ON ",
            DELIVERIES,
            " (tour_id);
             CREATE INDEX idx_",
            DELIVERIES,
            "_status ON ",
            DELIVERIES,
            " (status);"
        )
    }
}

impl Schema for Notifications {
    fn name() -> &'static str {
        NOTIFICATIONS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            NOTIFICATIONS,
            " (
                id           BIGSERIAL PRIMARY KEY,
                delivery_id  BIGINT,
                channel      VARCHAR(8)   NOT NULL,
                recipient    VARCHAR(255) NOT NULL,
                body         TEXT         NOT NULL,
                sent_at      TIMESTAMPTZ  NOT NULL DEFAULT now(),
                failed       BOOLEAN      NOT NULL DEFAULT FALSE
            );"
        )
    }
}

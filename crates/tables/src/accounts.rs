//! People: administrators, drivers and the customers they deliver to.
use courier_pg::*;

/// Administrator accounts for the dispatch console.
pub struct AdminDetails;

/// Driver profiles, contact details and current availability.
pub struct DriverDetails;

/// Delivery recipients.
pub struct Customers;

impl Schema for AdminDetails {
    fn name() -> &'static str {
        ADMIN_DETAILS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            ADMIN_DETAILS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                first_name  VARCHAR(64)  NOT NULL,
                last_name   VARCHAR(64)  NOT NULL,
                email       VARCHAR(255) UNIQUE NOT NULL,
                phone       VARCHAR(32),
                hashword    TEXT         NOT NULL,
                created_at  TIMESTAMPTZ  NOT NULL DEFAULT now()
            );"
        )
    }
}

impl Schema for DriverDetails {
    fn name() -> &'static str {
        DRIVER_DETAILS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            DRIVER_DETAILS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                first_name  VARCHAR(64)  NOT NULL,
                last_name   VARCHAR(64)  NOT NULL,
                email       VARCHAR(255) UNIQUE NOT NULL,
                phone       VARCHAR(32)  NOT NULL,
                hashword    TEXT         NOT NULL,
                licence_no  VARCHAR(32),
                picture_url TEXT,
                available   BOOLEAN      NOT NULL DEFAULT TRUE,
                created_at  TIMESTAMPTZ  NOT NULL DEFAULT now()
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX idx_",
            DRIVER_DETAILS,
            "_available ON ",
            DRIVER_DETAILS,
            " (available);"
        )
    }
}

impl Schema for Customers {
    fn name() -> &'static str {
        CUSTOMERS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            CUSTOMERS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                name        VARCHAR(128) NOT NULL,
                phone       VARCHAR(32)  NOT NULL,
                email       VARCHAR(255),
                address     TEXT         NOT NULL,
                latitude    DOUBLE PRECISION,
                longitude   DOUBLE PRECISION
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX idx_",
            CUSTOMERS,
            "_phone ON ",
            CUSTOMERS,
            " (phone);"
        )
    }
}

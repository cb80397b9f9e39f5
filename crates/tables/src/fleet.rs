//! Vehicles and the tours drivers run with them.
use courier_pg::*;

/// Vehicle fleet.
pub struct Vehicles;

/// A driver's planned sequence of deliveries for one shift.
pub struct Tours;

/// Estimated legs between consecutive stops of a tour.
pub struct RouteSegments;

impl Schema for Vehicles {
    fn name() -> &'static str {
        VEHICLES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            VEHICLES,
            " (
                id          BIGSERIAL PRIMARY KEY,
                plate       VARCHAR(16)  UNIQUE NOT NULL,
                model       VARCHAR(64),
                capacity_kg REAL,
                in_service  BOOLEAN      NOT NULL DEFAULT TRUE
            );"
        )
    }
}

impl Schema for Tours {
    fn name() -> &'static str {
        TOURS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            TOURS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                driver_id   BIGINT,
                vehicle_id  BIGINT,
                tour_date   DATE         NOT NULL,
                status      VARCHAR(16)  NOT NULL DEFAULT 'planned',
                started_at  TIMESTAMPTZ,
                finished_at TIMESTAMPTZ
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX idx_",
            TOURS,
            "_driver ON ",
            TOURS,
            " (driver_id, tour_date);"
        )
    }
}

impl Schema for RouteSegments {
    fn name() -> &'static str {
        ROUTE_SEGMENTS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            ROUTE_SEGMENTS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                tour_id     BIGINT       NOT NULL,
                seq         SMALLINT     NOT NULL,
                from_lat    DOUBLE PRECISION NOT NULL,
                from_lng    DOUBLE PRECISION NOT NULL,
                to_lat      DOUBLE PRECISION NOT NULL,
                to_lng      DOUBLE PRECISION NOT NULL,
                distance_m  INTEGER,
                duration_s  INTEGER,
                polyline    TEXT,
                UNIQUE (tour_id, seq)
            );"
        )
    }
}

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::AppError;
use crate::models::Zone;

/// All dates and times are interpreted in the shop's local time.
pub const TIMEZONE: Tz = chrono_tz::America::Denver;

pub fn shop_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&TIMEZONE)
}

const HOME_BASE_ZIP: &str = "81039";

const PUEBLO_ZIPS: &[&str] = &[
    "81001", "81003", "81004", "81005", "81006", "81007", "81008", "81009", "81010", "81011",
    "81012", "81019", "81020", "81021", "81022", "81023", "81025",
];

const VALLEY_ZIPS: &[&str] = &[
    "81020", "81021", "81022", "81024", "81027", "81030", "81041", "81043", "81050", "81054",
    "81055", "81059", "81062", "81063", "81071", "81073", "81082", "81089", "81090", "81091",
];

const EXCLUDED_APPLIANCES: &[&str] = &[
    "microwave",
    "toaster",
    "coffee maker",
    "blender",
    "mixer",
    "air fryer",
    "slow cooker",
    "pressure cooker",
    "rice cooker",
];

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub composio_api_key: String,
    pub composio_base_url: String,
    pub calendar_id: String,
    pub calendar_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            composio_api_key: env::var("COMPOSIO_API_KEY").unwrap_or_default(),
            composio_base_url: env::var("COMPOSIO_BASE_URL")
                .unwrap_or_else(|_| "https://backend.composio.dev".to_string()),
            calendar_id: env::var("CALENDAR_ID").unwrap_or_else(|_| "primary".to_string()),
            calendar_timeout_secs: env::var("CALENDAR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn calendar_timeout(&self) -> Duration {
        Duration::from_secs(self.calendar_timeout_secs)
    }
}

/// Fixed (date, zone) pair that seeds the alternating rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationAnchor {
    pub date: NaiveDate,
    pub zone: Zone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    pub start: u32,
    /// Exclusive for rotating-zone slot generation.
    pub end: u32,
    pub slot_hours: u32,
}

/// Static business rules: ZIP coverage, hours, excluded appliances and the rotation anchor.
/// Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct ServiceArea {
    pub home_zip: String,
    pub pueblo_zips: HashSet<String>,
    pub valley_zips: HashSet<String>,
    pub hours: BusinessHours,
    pub home_slots: Vec<u32>,
    pub excluded_appliances: Vec<String>,
    pub anchor: RotationAnchor,
}

impl ServiceArea {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        home_zip: &str,
        pueblo_zips: &[&str],
        valley_zips: &[&str],
        hours: BusinessHours,
        home_slots: Vec<u32>,
        excluded_appliances: &[&str],
        anchor: RotationAnchor,
    ) -> Result<Self, AppError> {
        if !anchor.zone.is_rotating() {
            return Err(AppError::Config(format!(
                "rotation anchor must be a rotating zone, got {}",
                anchor.zone
            )));
        }
        if hours.start >= hours.end || hours.end > 24 {
            return Err(AppError::Config(format!(
                "invalid business hours: {}-{}",
                hours.start, hours.end
            )));
        }
        if hours.slot_hours == 0 {
            return Err(AppError::Config("slot length must be at least one hour".to_string()));
        }

        let to_set = |zips: &[&str]| zips.iter().map(|z| z.to_string()).collect::<HashSet<_>>();

        Ok(Self {
            home_zip: home_zip.to_string(),
            pueblo_zips: to_set(pueblo_zips),
            valley_zips: to_set(valley_zips),
            hours,
            home_slots,
            excluded_appliances: excluded_appliances
                .iter()
                .map(|a| a.to_lowercase())
                .collect(),
            anchor,
        })
    }

    /// Malone's Appliance Repair: home base in 81039, Pueblo and Arkansas Valley routes
    /// alternating by business day from Tuesday 2025-12-02 (Pueblo).
    pub fn malones() -> Result<Self, AppError> {
        let anchor_date = NaiveDate::from_ymd_opt(2025, 12, 2)
            .ok_or_else(|| AppError::Config("invalid anchor date".to_string()))?;

        Self::new(
            HOME_BASE_ZIP,
            PUEBLO_ZIPS,
            VALLEY_ZIPS,
            BusinessHours {
                start: 9,
                end: 16,
                slot_hours: 2,
            },
            vec![9, 16],
            EXCLUDED_APPLIANCES,
            RotationAnchor {
                date: anchor_date,
                zone: Zone::Pueblo,
            },
        )
    }
}

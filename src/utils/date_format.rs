use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::utils::constants::NOT_AVAILABLE;

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formatos sin zona horaria: se interpretan en hora local, igual que `new Date(...)`
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Formatea `fecha_subida` como `DD/MM/YYYY HH:MM` en la zona horaria local.
///
/// Sin fecha devuelve `N/A`; si no se puede interpretar se muestra el texto tal cual.
pub fn format_upload_date(fecha: Option<&str>) -> String {
    let Some(raw) = fecha.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_timestamp(raw) {
        Some(local) => local.format(DISPLAY_FORMAT).to_string(),
        None => {
            log::debug!("📅 Fecha no reconocida, se muestra sin formato: {}", raw);
            raw.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    // Solo fecha: ECMAScript la trata como medianoche UTC
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_display(utc: DateTime<Utc>) -> String {
        utc.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
    }

    #[test]
    fn utc_timestamp_is_shown_in_local_time() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_upload_date(Some("2024-03-05T14:07:00Z")), local_display(utc));
    }

    #[test]
    fn offset_and_fraction_are_accepted() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 5, 12, 7, 0).unwrap();
        assert_eq!(
            format_upload_date(Some("2024-03-05T14:07:00.123456+02:00")),
            local_display(utc)
        );
    }

    #[test]
    fn naive_timestamp_is_local_time() {
        assert_eq!(format_upload_date(Some("2024-03-05 09:30:00")), "05/03/2024 09:30");
        assert_eq!(format_upload_date(Some("2024-03-05T09:30")), "05/03/2024 09:30");
    }

    #[test]
    fn date_only_is_utc_midnight() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_upload_date(Some("2024-03-05")), local_display(utc));
    }

    #[test]
    fn missing_date_is_not_available() {
        assert_eq!(format_upload_date(None), "N/A");
        assert_eq!(format_upload_date(Some("")), "N/A");
        assert_eq!(format_upload_date(Some("   ")), "N/A");
    }

    #[test]
    fn unparseable_date_is_shown_as_is() {
        assert_eq!(format_upload_date(Some("ayer por la tarde")), "ayer por la tarde");
    }
}

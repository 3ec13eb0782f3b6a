//! Sexagesimal formatting for chart coordinates.
//!
//! Components are truncated, not rounded, so a value never displays as
//! `60` seconds or minutes.

/// Hours as `HH:MM:SS`.
pub fn format_hours(hours: f64) -> String {
    let (h, m, s) = split_sexagesimal(hours.abs());
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Degrees as `±DD°MM'SS"`; the sign is `-` only for negative values.
pub fn format_degrees(degrees: f64) -> String {
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = split_sexagesimal(degrees.abs());
    format!("{}{:02}°{:02}'{:02}\"", sign, d, m, s)
}

/// Split a non-negative value into whole units, minutes and seconds.
fn split_sexagesimal(value: f64) -> (u64, u64, u64) {
    if !value.is_finite() {
        return (0, 0, 0);
    }
    let whole = value.trunc();
    let minutes_f = (value - whole) * 60.0;
    let minutes = minutes_f.trunc();
    let seconds = ((minutes_f - minutes) * 60.0).trunc();
    (whole as u64, minutes as u64, seconds as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "00:00:00");
        assert_eq!(format_hours(6.752), "06:45:07");
        assert_eq!(format_hours(23.5), "23:30:00");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(0.0), "+00°00'00\"");
        assert_eq!(format_degrees(-16.716), "-16°42'57\"");
        assert_eq!(format_degrees(89.264), "+89°15'50\"");
        assert_eq!(format_degrees(-90.0), "-90°00'00\"");
    }

    #[test]
    fn test_truncation_never_shows_sixty() {
        let text = format_degrees(10.999999);
        assert!(!text.contains("60"), "{text}");
        let text = format_hours(1.999999);
        assert!(!text.contains(":60"), "{text}");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_hours(f64::NAN), "00:00:00");
    }
}

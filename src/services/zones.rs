use crate::config::ServiceArea;
use crate::models::{Coverage, Zone};

/// Maps a ZIP code to the zone that services it. The home ZIP wins, then Pueblo, then
/// Valley; a few ZIPs sit in both route lists and resolve to Pueblo.
pub fn classify(area: &ServiceArea, zip: &str) -> Coverage {
    let zip = zip.trim();
    if zip == area.home_zip {
        Coverage::Serviced(Zone::Home)
    } else if area.pueblo_zips.contains(zip) {
        Coverage::Serviced(Zone::Pueblo)
    } else if area.valley_zips.contains(zip) {
        Coverage::Serviced(Zone::Valley)
    } else {
        Coverage::Unserviced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ServiceArea {
        ServiceArea::malones().unwrap()
    }

    #[test]
    fn test_home_zip() {
        assert_eq!(classify(&area(), "81039"), Coverage::Serviced(Zone::Home));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(classify(&area(), "  81039\n"), Coverage::Serviced(Zone::Home));
        assert_eq!(classify(&area(), " 81001 "), Coverage::Serviced(Zone::Pueblo));
    }

    #[test]
    fn test_pueblo_and_valley() {
        assert_eq!(classify(&area(), "81008"), Coverage::Serviced(Zone::Pueblo));
        assert_eq!(classify(&area(), "81050"), Coverage::Serviced(Zone::Valley));
    }

    #[test]
    fn test_overlapping_zip_resolves_to_pueblo() {
        for zip in ["81020", "81021", "81022"] {
            assert_eq!(classify(&area(), zip), Coverage::Serviced(Zone::Pueblo), "{zip}");
        }
    }

    #[test]
    fn test_unserviced() {
        assert_eq!(classify(&area(), "99999"), Coverage::Unserviced);
        assert_eq!(classify(&area(), ""), Coverage::Unserviced);
        assert_eq!(classify(&area(), "81039-1234"), Coverage::Unserviced);
    }
}

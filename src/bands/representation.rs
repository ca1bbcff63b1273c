//! Value types shared by the band tables and their consumers.

use std::ops::RangeInclusive;

use serde::Serialize;

/// Resolved band information for a single NR downlink ARFCN.
///
/// Produced by [`crate::bands::nr::resolve`]. The frequency is always
/// computed; `number` and `name` are both absent when no band definition
/// matched, and `name` may be present while `number` is absent when the
/// match was ambiguous but all candidates agreed on the frequency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BandNr {
    /// The channel number the resolution was requested for.
    pub downlink_arfcn: u32,
    /// Downlink carrier frequency in kHz.
    pub downlink_frequency: u32,
    /// 3GPP band number (e.g. 78 for n78), if the band could be identified.
    pub number: Option<u16>,
    /// Approximate frequency class of the band (e.g. "2600"), if known.
    pub name: Option<&'static str>,
}

/// Internal band table entry.
///
/// Entries are created once in a static table and never mutated. Ranges of
/// different entries may overlap arbitrarily; disambiguation is the
/// resolver's job, not the table's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BandEntity {
    /// Inclusive channel number range claimed by this band.
    pub channel_range: RangeInclusive<u32>,
    /// Approximate frequency class (850, 900, 2100, 2600, ...).
    /// Not unique; several standardized bands can share one class.
    pub name: &'static str,
    /// 3GPP band number. `None` only on synthesized merged results,
    /// never on table entries.
    pub number: Option<u16>,
    /// Tie-break rank for overlapping ranges. Higher wins, baseline 0.
    /// Only the ordering matters, never the concrete value.
    pub priority: u8,
}

impl BandEntity {
    pub(crate) const fn new(
        channel_range: RangeInclusive<u32>,
        name: &'static str,
        number: u16,
        priority: u8,
    ) -> Self {
        Self {
            channel_range,
            name,
            number: Some(number),
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_nr_json_shape() {
        let band = BandNr {
            downlink_arfcn: 125_000,
            downlink_frequency: 625_000,
            number: Some(71),
            name: Some("600"),
        };
        let json = serde_json::to_string(&band).unwrap();
        assert_eq!(
            json,
            r#"{"downlink_arfcn":125000,"downlink_frequency":625000,"number":71,"name":"600"}"#
        );
    }

    #[test]
    fn test_band_nr_json_absent_fields() {
        let band = BandNr {
            downlink_arfcn: 1_000_000,
            downlink_frequency: 9_000_000,
            number: None,
            name: None,
        };
        let json = serde_json::to_string(&band).unwrap();
        assert_eq!(
            json,
            r#"{"downlink_arfcn":1000000,"downlink_frequency":9000000,"number":null,"name":null}"#
        );
    }

    #[test]
    fn test_table_entries_always_carry_a_number() {
        let entity = BandEntity::new(123_400..=130_400, "600", 71, 0);
        assert_eq!(entity.number, Some(71));
        assert_eq!(entity.priority, 0);
    }
}

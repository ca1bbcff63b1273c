//! NR (5G) band table and ARFCN resolution.
//!
//! In the NR world loads of ARFCN ranges overlap: several standardized
//! bands can legally claim the same channel number, so identifying a band
//! is mostly a disambiguation problem. The table below holds all release
//! 16.0.0 bands that have a downlink defined, per 3GPP TS 38.101-1.

use log::debug;

use super::representation::{BandEntity, BandNr};

/// Smallest channel bandwidth in kHz, used by the raster tie-break.
const SMALLEST_BANDWIDTH: u32 = 5_000;

static BANDS: [BandEntity; 39] = [
    BandEntity::new(123_400..=130_400, "600", 71, 0),
    BandEntity::new(143_400..=145_600, "700", 29, 0),
    BandEntity::new(145_800..=149_200, "700", 12, 0),
    BandEntity::new(151_600..=160_600, "700", 28, 1),
    BandEntity::new(151_600..=153_600, "700", 14, 0),
    BandEntity::new(158_200..=164_200, "800", 20, 1),
    BandEntity::new(171_800..=178_800, "850", 26, 0),
    BandEntity::new(172_000..=175_000, "800", 18, 0),
    BandEntity::new(173_800..=178_800, "850", 5, 0),
    BandEntity::new(185_000..=192_000, "900", 8, 1),
    BandEntity::new(285_400..=286_400, "1500", 51, 0),
    BandEntity::new(285_400..=286_400, "1500", 76, 0),
    BandEntity::new(285_400..=286_400, "1500", 93, 0),
    BandEntity::new(285_400..=286_400, "1500", 91, 0),
    BandEntity::new(286_400..=303_400, "1500", 50, 0),
    BandEntity::new(286_400..=303_400, "1500", 75, 0),
    BandEntity::new(286_400..=303_400, "1500", 92, 0),
    BandEntity::new(286_400..=303_400, "1500", 94, 0),
    BandEntity::new(295_000..=303_600, "1500", 74, 0),
    BandEntity::new(361_000..=376_000, "1800", 3, 1),
    BandEntity::new(376_000..=384_000, "1900", 39, 0),
    BandEntity::new(386_000..=398_000, "1900", 2, 0),
    BandEntity::new(386_000..=399_000, "1900", 25, 0),
    BandEntity::new(399_000..=404_000, "2000", 70, 0),
    BandEntity::new(402_000..=405_000, "2000", 34, 0),
    BandEntity::new(422_000..=440_000, "2100", 66, 0),
    BandEntity::new(422_000..=434_000, "2100", 1, 1),
    BandEntity::new(422_000..=440_000, "2100", 65, 0),
    BandEntity::new(460_000..=480_000, "2300", 40, 0),
    BandEntity::new(470_000..=472_000, "2300", 30, 0),
    BandEntity::new(496_700..=499_000, "2500", 53, 0),
    BandEntity::new(499_200..=537_999, "2600", 41, 0),
    BandEntity::new(499_200..=538_000, "2600", 90, 0),
    BandEntity::new(514_000..=524_000, "2600", 38, 0),
    BandEntity::new(524_000..=538_000, "2600", 7, 0),
    BandEntity::new(620_000..=680_000, "3700", 77, 0),
    BandEntity::new(620_000..=653_333, "3500", 78, 1),
    BandEntity::new(636_667..=646_666, "3600", 48, 0),
    BandEntity::new(693_334..=733_333, "4500", 79, 0),
];

/// Calculates the downlink frequency in kHz for an NR-ARFCN.
///
/// Piecewise-linear mapping from 3GPP TS 38.101-1 / 5.4.2.1
/// (NR-ARFCN and channel raster). Exact integer arithmetic over the
/// whole standardized ARFCN range; inputs so large that the result
/// exceeds `u32` clamp to `u32::MAX` instead of overflowing. The
/// boundary value 600_000 belongs to the low branch.
///
/// # Example
/// ```
/// use nrband::bands::nr::downlink_frequency;
///
/// assert_eq!(downlink_frequency(125_000), 625_000);
/// assert_eq!(downlink_frequency(600_000), 3_000_000);
/// assert_eq!(downlink_frequency(600_001), 3_000_015);
/// ```
pub fn downlink_frequency(arfcn: u32) -> u32 {
    if arfcn <= 600_000 {
        5 * arfcn
    } else {
        let khz = 3_000_000 + 15 * (u64::from(arfcn) - 600_000);
        u32::try_from(khz).unwrap_or(u32::MAX)
    }
}

/// Attempts to identify the NR band for an ARFCN.
///
/// The returned [`BandNr`] always carries the input ARFCN and its downlink
/// frequency. `number` and `name` are filled in as far as the band table
/// allows: an unambiguous match yields both, an ambiguous match between
/// same-class bands yields only `name`, and no match yields neither.
/// "No match" is a regular result, not an error.
///
/// A non-empty `band_hints` slice restricts matching to table entries
/// whose band number is listed in it.
///
/// # Example
/// ```
/// use nrband::bands::nr::resolve;
///
/// let band = resolve(125_000, &[]);
/// assert_eq!(band.number, Some(71));
/// assert_eq!(band.name, Some("600"));
/// assert_eq!(band.downlink_frequency, 625_000);
/// ```
pub fn resolve(arfcn: u32, band_hints: &[u16]) -> BandNr {
    let raw = lookup(arfcn, band_hints);
    BandNr {
        downlink_arfcn: arfcn,
        downlink_frequency: downlink_frequency(arfcn),
        number: raw.as_ref().and_then(|band| band.number),
        name: raw.as_ref().map(|band| band.name),
    }
}

fn lookup(arfcn: u32, band_hints: &[u16]) -> Option<BandEntity> {
    let candidates: Vec<&BandEntity> = BANDS
        .iter()
        .filter(|band| band.channel_range.contains(&arfcn))
        .filter(|band| {
            band_hints.is_empty()
                || band
                    .number
                    .map_or(false, |number| band_hints.contains(&number))
        })
        .collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some((*only).clone()),
        _ => disambiguate(arfcn, &candidates),
    }
}

/// Picks one band out of several whose ranges all contain `arfcn`.
fn disambiguate(arfcn: u32, candidates: &[&BandEntity]) -> Option<BandEntity> {
    // Authored priorities settle the known-problematic overlaps first,
    // but only when the maximum is held by a single candidate.
    if let Some(winner) = unique_highest_priority(candidates) {
        debug!(
            "arfcn {}: {} candidates, band {:?} wins on priority",
            arfcn,
            candidates.len(),
            winner.number
        );
        return Some(winner.clone());
    }

    // Raster check. We assume 5 MHz as the smallest bandwidth (not every
    // band supports 5 MHz, but it is the smallest possible value), that
    // blocks are packed without non-5 MHz gaps, and that the first
    // assigned block sits at the band's uppermost ARFCN. Each candidate
    // anchors on its own upper bound.
    let frequency = downlink_frequency(arfcn);
    let on_raster: Vec<&BandEntity> = candidates
        .iter()
        .copied()
        .filter(|band| {
            let start_frequency = downlink_frequency(*band.channel_range.end());
            (start_frequency - frequency) % SMALLEST_BANDWIDTH == 0
        })
        .collect();

    match on_raster.as_slice() {
        [] => {
            debug!("arfcn {}: no candidate on raster, merging by name", arfcn);
            merge_by_name_widened(candidates)
        }
        [only] => {
            debug!("arfcn {}: band {:?} wins on raster", arfcn, only.number);
            Some((*only).clone())
        }
        several => {
            // Multiple bands fit; this does happen in the real world.
            // If at least the names all match we can still report the
            // frequency class.
            debug!(
                "arfcn {}: {} candidates on raster, merging by name",
                arfcn,
                several.len()
            );
            merge_by_name(several)
        }
    }
}

/// The candidate holding the strictly unique highest priority, if any.
fn unique_highest_priority<'a>(candidates: &[&'a BandEntity]) -> Option<&'a BandEntity> {
    let top = candidates.iter().map(|band| band.priority).max()?;
    let mut at_top = candidates
        .iter()
        .copied()
        .filter(|band| band.priority == top);
    let winner = at_top.next()?;
    if at_top.next().is_none() {
        Some(winner)
    } else {
        None
    }
}

/// Collapses a tied set to a name-only result when all entries share one
/// name. The band number is cleared: the frequency class is known, the
/// exact band is not.
fn merge_by_name(entries: &[&BandEntity]) -> Option<BandEntity> {
    let name = entries.first()?.name;
    if entries.iter().any(|band| band.name != name) {
        return None;
    }
    Some(BandEntity {
        number: None,
        ..entries[0].clone()
    })
}

/// Like [`merge_by_name`], but also widens the range to the safest bounds:
/// min of all starts, max of all ends.
fn merge_by_name_widened(entries: &[&BandEntity]) -> Option<BandEntity> {
    let mut merged = merge_by_name(entries)?;
    let start = entries.iter().map(|band| *band.channel_range.start()).min()?;
    let end = entries.iter().map(|band| *band.channel_range.end()).max()?;
    merged.channel_range = start..=end;
    Some(merged)
}

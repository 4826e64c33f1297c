use crate::error::{ProcessingError, Result};
use crate::models::{Region, RegionAverage, Ring};
use crate::utils::coordinates::mean;
use crate::utils::ProgressReporter;
use tracing::debug;
use validator::Validate;

/// Reduces each timezone region to one representative coordinate.
///
/// Every ring (outer boundaries and holes alike) is first averaged over its
/// own vertices; the region's location is then the plain mean of those ring
/// means. Small islands therefore pull the result as hard as a continent.
/// Coordinates are averaged as flat degrees with no area weighting.
pub struct RegionAverager;

impl RegionAverager {
    pub fn new() -> Self {
        Self
    }

    pub fn average_region(&self, region: &Region) -> Result<RegionAverage> {
        let ring_means = region
            .rings()
            .enumerate()
            .map(|(index, ring)| ring_mean(&region.tzid, index, ring))
            .collect::<Result<Vec<(f64, f64)>>>()?;

        let latitude = mean(ring_means.iter().map(|(lat, _)| *lat));
        let longitude = mean(ring_means.iter().map(|(_, lon)| *lon));

        let (latitude, longitude) = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Err(ProcessingError::EmptyRegion {
                    tzid: region.tzid.clone(),
                })
            }
        };

        let average = RegionAverage::new(region.tzid.clone(), latitude, longitude);
        average.validate()?;

        debug!(
            "{}: {} rings -> ({:.4}, {:.4})",
            region.tzid,
            ring_means.len(),
            latitude,
            longitude
        );

        Ok(average)
    }

    /// Average every region, preserving input order
    pub fn average_all(
        &self,
        regions: &[Region],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RegionAverage>> {
        let mut averages = Vec::with_capacity(regions.len());

        for region in regions {
            averages.push(self.average_region(region)?);
            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        Ok(averages)
    }
}

impl Default for RegionAverager {
    fn default() -> Self {
        Self::new()
    }
}

/// (mean latitude, mean longitude) of one ring's vertices
fn ring_mean(tzid: &str, index: usize, ring: &Ring) -> Result<(f64, f64)> {
    let latitude = mean(ring.iter().map(|p| p.latitude));
    let longitude = mean(ring.iter().map(|p| p.longitude));

    latitude.zip(longitude).ok_or_else(|| ProcessingError::EmptyRing {
        tzid: tzid.to_string(),
        ring: index,
    })
}

//! Nearest partner unit resolution.
//!
//! Given a city, finds the active partner units of the nearest distinct cities (not the
//! nearest individual units) and groups them by city with the great-circle distance from
//! the queried city.
//!
//! Resolution is a pure read: the queried city and every active unit are loaded, distances
//! are computed in application code with the haversine formula, and cities are ranked in
//! memory. Cities are grouped by ID so same-named cities in different states never merge.

use deunicode::deunicode;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{city::CityRepository, partner_unit::PartnerUnitRepository},
    error::AppError,
    model::{
        nearby::{NearbyCityUnits, NearbyUnits},
        partner_unit::{PartnerUnit, PartnerUnitWithCity},
    },
    util::geo::{round_km, Coordinates},
};

/// Number of distinct cities returned by a nearby lookup.
pub const NEARBY_CITY_LIMIT: usize = 3;

/// Service resolving the partner units closest to a city.
pub struct NearbyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NearbyService<'a> {
    /// Creates a new NearbyService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active partner units of the cities nearest to `city_id`.
    ///
    /// Ranks every city that has at least one active unit by its distance from the queried
    /// city and keeps the closest `NEARBY_CITY_LIMIT` of them, returning all of their
    /// active units. The queried city itself is a candidate at distance zero.
    ///
    /// # Arguments
    /// - `city_id` - ID of the city to search around
    ///
    /// # Returns
    /// - `Ok(NearbyUnits::Found)` - Grouped units ordered by distance
    /// - `Ok(NearbyUnits::Empty)` - City exists but no active unit exists anywhere
    /// - `Err(AppError::NotFound)` - City does not exist
    /// - `Err(AppError::DbErr)` - Database error or unavailable database
    pub async fn find_nearby_units(&self, city_id: i32) -> Result<NearbyUnits, AppError> {
        let origin = CityRepository::new(self.db)
            .find_with_state(city_id)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

        let candidates = PartnerUnitRepository::new(self.db)
            .get_active_with_city()
            .await?;

        let candidate_count = candidates.len();
        let groups =
            group_nearest_cities(origin.city.coordinates(), candidates, NEARBY_CITY_LIMIT);

        if groups.is_empty() {
            tracing::debug!("No active partner units found near city {}", city_id);

            let message = format!(
                "No partner units found near {} - {}",
                origin.city.name, origin.state.abbreviation
            );

            return Ok(NearbyUnits::Empty { origin, message });
        }

        tracing::debug!(
            "Resolved {} cities from {} active units near city {}",
            groups.len(),
            candidate_count,
            city_id
        );

        Ok(NearbyUnits::Found { origin, groups })
    }
}

/// Units collected for one candidate city while ranking.
struct CityCandidate {
    city_id: i32,
    city_name: String,
    name_key: String,
    state_abbreviation: String,
    /// Smallest unit distance in the city, full precision.
    distance: f64,
    units: Vec<RankedUnit>,
}

struct RankedUnit {
    distance: f64,
    name_key: String,
    unit: PartnerUnit,
}

/// Groups candidate units by city and keeps the `limit` nearest cities.
///
/// Cities are ordered by distance from `origin`, then alphabetically by name, then by ID.
/// Units inside a city are ordered by distance, then alphabetically by name, then by ID.
/// Names compare case and accent insensitively ("Águas" sorts before "barra" and "Zeta")
/// with the raw name as a fallback. Distances are rounded to one decimal only after
/// ranking.
///
/// # Arguments
/// - `origin` - Coordinates of the queried city
/// - `candidates` - Active units joined with their cities
/// - `limit` - Maximum number of distinct cities to return
///
/// # Returns
/// - `Vec<NearbyCityUnits>` - At most `limit` groups, empty when there are no candidates
pub fn group_nearest_cities(
    origin: Coordinates,
    candidates: Vec<PartnerUnitWithCity>,
    limit: usize,
) -> Vec<NearbyCityUnits> {
    let mut by_city: HashMap<i32, CityCandidate> = HashMap::new();

    for candidate in candidates {
        let distance = origin.distance_km(&candidate.city.coordinates());

        let entry = by_city
            .entry(candidate.city.id)
            .or_insert_with(|| CityCandidate {
                city_id: candidate.city.id,
                city_name: candidate.city.name.clone(),
                name_key: name_sort_key(&candidate.city.name),
                state_abbreviation: candidate.state_abbreviation.clone(),
                distance,
                units: Vec::new(),
            });

        entry.distance = entry.distance.min(distance);
        entry.units.push(RankedUnit {
            distance,
            name_key: name_sort_key(&candidate.unit.name),
            unit: candidate.unit,
        });
    }

    let mut cities: Vec<CityCandidate> = by_city.into_values().collect();
    cities.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.name_key.cmp(&b.name_key))
            .then_with(|| a.city_name.cmp(&b.city_name))
            .then_with(|| a.city_id.cmp(&b.city_id))
    });
    cities.truncate(limit);

    cities
        .into_iter()
        .map(|mut city| {
            city.units.sort_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.name_key.cmp(&b.name_key))
                    .then_with(|| a.unit.name.cmp(&b.unit.name))
                    .then_with(|| a.unit.id.cmp(&b.unit.id))
            });

            NearbyCityUnits {
                city_id: city.city_id,
                city_name: city.city_name,
                state_abbreviation: city.state_abbreviation,
                distance_km: round_km(city.distance),
                units: city.units.into_iter().map(|ranked| ranked.unit).collect(),
            }
        })
        .collect()
}

/// Lower-cased ASCII transliteration used for alphabetical comparison.
fn name_sort_key(name: &str) -> String {
    deunicode(name).to_lowercase()
}

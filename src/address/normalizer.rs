//! Maps provider place results onto [`NormalizedAddress`].
//!
//! Everything here is a pure function of the query and the provider payload,
//! so the heuristics can be exercised without any network access.

use super::types::{AddressComponent, NormalizedAddress, RawPlaceResult};
use crate::constants::DEFAULT_COUNTRY;

/// Component values pulled out of a single place result, by tag.
///
/// A value is `None` when no component carries the tag or the first one that
/// does has empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedComponents {
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub subpremise: Option<String>,
    pub premise: Option<String>,
    pub establishment: Option<String>,
    /// Extracted for callers; no line rule reads it.
    pub point_of_interest: Option<String>,
    pub locality: Option<String>,
    pub admin_area_2: Option<String>,
    pub admin_area_1: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl ExtractedComponents {
    pub fn from_components(components: &[AddressComponent]) -> Self {
        Self {
            street_number: first_of(components, "street_number"),
            route: first_of(components, "route"),
            subpremise: first_of(components, "subpremise"),
            premise: first_of(components, "premise"),
            establishment: first_of(components, "establishment"),
            point_of_interest: first_of(components, "point_of_interest"),
            locality: first_of(components, "locality")
                .or_else(|| first_of(components, "postal_town"))
                .or_else(|| first_of(components, "administrative_area_level_3")),
            admin_area_2: first_of(components, "administrative_area_level_2"),
            admin_area_1: first_of(components, "administrative_area_level_1"),
            country: first_of(components, "country"),
            postal_code: first_of(components, "postal_code"),
        }
    }

    fn numbered_street(&self) -> Option<String> {
        match (&self.street_number, &self.route) {
            (Some(number), Some(route)) => Some(format!("{} {}", number, route)),
            _ => None,
        }
    }

    /// Street line used when a building name has been identified
    fn street_line(&self) -> Option<String> {
        self.numbered_street().or_else(|| self.route.clone())
    }
}

/// First component carrying `tag`, as long text.
fn first_of(components: &[AddressComponent], tag: &str) -> Option<String> {
    components
        .iter()
        .find(|c| c.has_type(tag))
        .map(|c| c.long_text.clone())
        .filter(|text| !text.is_empty())
}

fn starts_with_digit(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn named_building(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !starts_with_digit(v))
}

/// Line 1 plus the building name captured on the way, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FirstLine {
    line: String,
    building_name: Option<String>,
}

fn derive_first_line(parts: &ExtractedComponents, formatted_address: &str) -> FirstLine {
    if let Some(building) = named_building(&parts.establishment) {
        return FirstLine {
            line: parts.street_line().unwrap_or_default(),
            building_name: Some(building.clone()),
        };
    }
    if let Some(building) = named_building(&parts.premise) {
        return FirstLine {
            line: parts.street_line().unwrap_or_default(),
            building_name: Some(building.clone()),
        };
    }

    let line = if let Some(street) = parts.numbered_street() {
        street
    } else if let Some(premise) = &parts.premise {
        premise.clone()
    } else if let Some(route) = &parts.route {
        route.clone()
    } else {
        formatted_address
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string()
    };

    FirstLine {
        line,
        building_name: None,
    }
}

fn derive_second_line(subpremise: Option<&str>, first: &FirstLine) -> Option<String> {
    if let Some(sub) = subpremise {
        return Some(if starts_with_digit(sub) {
            format!("Flat {}", sub)
        } else {
            sub.to_string()
        });
    }
    first
        .building_name
        .as_ref()
        .filter(|name| **name != first.line)
        .cloned()
}

/// Normalizes a single place. The result may still fail the
/// line 1 / town requirement; see [`is_usable`].
pub fn normalize_place(query: &str, place: &RawPlaceResult) -> NormalizedAddress {
    let parts = ExtractedComponents::from_components(&place.address_components);
    let first = derive_first_line(&parts, &place.formatted_address);
    let address_line_2 = derive_second_line(parts.subpremise.as_deref(), &first);

    NormalizedAddress {
        address_line_1: first.line,
        address_line_2,
        street_name: parts.route,
        street_number: parts.street_number,
        building_name: first.building_name,
        sub_building: parts.subpremise,
        town_or_city: parts.locality.unwrap_or_default(),
        county: parts.admin_area_2.or(parts.admin_area_1),
        postcode: parts
            .postal_code
            .unwrap_or_else(|| query.to_uppercase()),
        formatted_address: place.formatted_address.clone(),
        country: Some(parts.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string())),
    }
}

/// An address is usable only with a first line and a town.
pub fn is_usable(address: &NormalizedAddress) -> bool {
    !address.address_line_1.is_empty() && !address.town_or_city.is_empty()
}

/// Normalizes every place, dropping unusable ones. Provider order is kept.
pub fn normalize_places(query: &str, places: &[RawPlaceResult]) -> Vec<NormalizedAddress> {
    places
        .iter()
        .map(|place| normalize_place(query, place))
        .filter(is_usable)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(text: &str, tags: &[&str]) -> AddressComponent {
        AddressComponent {
            long_text: text.to_string(),
            short_text: text.to_string(),
            types: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn place(formatted: &str, components: Vec<AddressComponent>) -> RawPlaceResult {
        RawPlaceResult {
            display_name: None,
            formatted_address: formatted.to_string(),
            address_components: components,
            types: Vec::new(),
        }
    }

    #[test]
    fn downing_street_scenario() {
        let raw = place(
            "10 Downing Street, London SW1A 1AA, UK",
            vec![
                component("10", &["street_number"]),
                component("Downing Street", &["route"]),
                component("London", &["locality", "political"]),
                component("SW1A 1AA", &["postal_code"]),
            ],
        );

        let out = normalize_places("SW1A 1AA", &[raw]);
        assert_eq!(out.len(), 1);
        let address = &out[0];
        assert_eq!(address.address_line_1, "10 Downing Street");
        assert_eq!(address.address_line_2, None);
        assert_eq!(address.town_or_city, "London");
        assert_eq!(address.postcode, "SW1A 1AA");
        assert_eq!(address.street_name.as_deref(), Some("Downing Street"));
        assert_eq!(address.street_number.as_deref(), Some("10"));
        assert_eq!(address.country.as_deref(), Some("United Kingdom"));
        assert_eq!(address.formatted_address, "10 Downing Street, London SW1A 1AA, UK");
    }

    #[test]
    fn named_establishment_becomes_building_name_and_line_two() {
        let raw = place(
            "Tower Bridge House, 1 Tower Bridge Road, London SE1 2UP, UK",
            vec![
                component("Tower Bridge House", &["establishment", "point_of_interest"]),
                component("1", &["street_number"]),
                component("Tower Bridge Road", &["route"]),
                component("London", &["postal_town"]),
            ],
        );

        let address = normalize_place("se1 2up", &raw);
        assert_eq!(address.address_line_1, "1 Tower Bridge Road");
        assert_eq!(address.building_name.as_deref(), Some("Tower Bridge House"));
        assert_eq!(address.address_line_2.as_deref(), Some("Tower Bridge House"));
        assert_eq!(address.postcode, "SE1 2UP");
    }

    #[test]
    fn building_name_with_route_only_uses_route() {
        let raw = place(
            "Kings Court, Market Street, Leeds, UK",
            vec![
                component("Kings Court", &["premise"]),
                component("Market Street", &["route"]),
                component("Leeds", &["locality"]),
            ],
        );

        let address = normalize_place("LS1", &raw);
        assert_eq!(address.address_line_1, "Market Street");
        assert_eq!(address.address_line_2.as_deref(), Some("Kings Court"));
    }

    #[test]
    fn point_of_interest_alone_is_not_a_building_name() {
        let components = vec![
            component("Big Ben", &["point_of_interest"]),
            component("Bridge Street", &["route"]),
            component("London", &["locality"]),
        ];
        let parts = ExtractedComponents::from_components(&components);
        assert_eq!(parts.point_of_interest.as_deref(), Some("Big Ben"));

        let address = normalize_place("SW1A", &place("Big Ben, London, UK", components));
        assert_eq!(address.address_line_1, "Bridge Street");
        assert_eq!(address.building_name, None);
        assert_eq!(address.address_line_2, None);
    }

    #[test]
    fn numeric_establishment_does_not_trigger_building_branch() {
        let raw = place(
            "12 Station Road, Reading, UK",
            vec![
                component("12", &["establishment"]),
                component("Station Road", &["route"]),
                component("Reading", &["locality"]),
            ],
        );

        let address = normalize_place("RG1", &raw);
        // rule 5: route only, no building name captured
        assert_eq!(address.address_line_1, "Station Road");
        assert_eq!(address.building_name, None);
        assert_eq!(address.address_line_2, None);
    }

    #[test]
    fn numeric_premise_is_used_as_line_one() {
        let raw = place(
            "27, Reading, UK",
            vec![component("27", &["premise"]), component("Reading", &["locality"])],
        );

        let address = normalize_place("RG1", &raw);
        assert_eq!(address.address_line_1, "27");
        assert_eq!(address.building_name, None);
    }

    #[test]
    fn numbered_street_beats_numeric_premise() {
        let raw = place(
            "4 Mill Lane, York, UK",
            vec![
                component("4A", &["premise"]),
                component("4", &["street_number"]),
                component("Mill Lane", &["route"]),
                component("York", &["locality"]),
            ],
        );

        assert_eq!(normalize_place("YO1", &raw).address_line_1, "4 Mill Lane");
    }

    #[test]
    fn falls_back_to_formatted_address_prefix() {
        let raw = place(
            "Unit 7 Riverside Park, Bristol BS1 4QA, UK",
            vec![component("Bristol", &["locality"])],
        );

        let address = normalize_place("BS1 4QA", &raw);
        assert_eq!(address.address_line_1, "Unit 7 Riverside Park");
    }

    #[test]
    fn fallback_without_comma_uses_whole_string() {
        let raw = place("Somewhere", vec![component("Derby", &["locality"])]);
        assert_eq!(normalize_place("DE1", &raw).address_line_1, "Somewhere");
    }

    #[test]
    fn numeric_subpremise_gets_flat_prefix() {
        let raw = place(
            "4 High Street, Bath, UK",
            vec![
                component("2", &["subpremise"]),
                component("4", &["street_number"]),
                component("High Street", &["route"]),
                component("Bath", &["locality"]),
            ],
        );

        let address = normalize_place("BA1", &raw);
        assert_eq!(address.address_line_2.as_deref(), Some("Flat 2"));
        assert_eq!(address.sub_building.as_deref(), Some("2"));
    }

    #[test]
    fn textual_subpremise_is_not_relabelled() {
        let raw = place(
            "4 High Street, Bath, UK",
            vec![
                component("Flat 4", &["subpremise"]),
                component("4", &["street_number"]),
                component("High Street", &["route"]),
                component("Bath", &["locality"]),
            ],
        );

        assert_eq!(
            normalize_place("BA1", &raw).address_line_2.as_deref(),
            Some("Flat 4")
        );
    }

    #[test]
    fn subpremise_takes_precedence_over_building_name() {
        let raw = place(
            "Kings Court, Market Street, Leeds, UK",
            vec![
                component("3", &["subpremise"]),
                component("Kings Court", &["premise"]),
                component("Market Street", &["route"]),
                component("Leeds", &["locality"]),
            ],
        );

        let address = normalize_place("LS1", &raw);
        assert_eq!(address.address_line_2.as_deref(), Some("Flat 3"));
        assert_eq!(address.building_name.as_deref(), Some("Kings Court"));
    }

    #[test]
    fn building_only_place_is_filtered_out() {
        let raw = place(
            "Kings Court, Leeds, UK",
            vec![component("Kings Court", &["premise"]), component("Leeds", &["locality"])],
        );

        let address = normalize_place("LS1", &raw);
        assert_eq!(address.address_line_1, "");
        assert_eq!(address.address_line_2.as_deref(), Some("Kings Court"));
        assert!(normalize_places("LS1", &[raw]).is_empty());
    }

    #[test]
    fn locality_fallback_chain() {
        let postal_town = place(
            "1 Green Lane, Guildford, UK",
            vec![
                component("1", &["street_number"]),
                component("Green Lane", &["route"]),
                component("Guildford", &["postal_town"]),
                component("Surrey", &["administrative_area_level_3"]),
            ],
        );
        assert_eq!(normalize_place("GU1", &postal_town).town_or_city, "Guildford");

        let admin3 = place(
            "1 Green Lane, UK",
            vec![
                component("Green Lane", &["route"]),
                component("Shalford", &["administrative_area_level_3"]),
            ],
        );
        assert_eq!(normalize_place("GU4", &admin3).town_or_city, "Shalford");
    }

    #[test]
    fn county_prefers_admin_area_two() {
        let both = place(
            "1 Green Lane, Guildford, UK",
            vec![
                component("Green Lane", &["route"]),
                component("Guildford", &["locality"]),
                component("England", &["administrative_area_level_1"]),
                component("Surrey", &["administrative_area_level_2"]),
            ],
        );
        assert_eq!(normalize_place("GU1", &both).county.as_deref(), Some("Surrey"));

        let only_one = place(
            "1 Green Lane, Guildford, UK",
            vec![
                component("Green Lane", &["route"]),
                component("Guildford", &["locality"]),
                component("England", &["administrative_area_level_1"]),
            ],
        );
        assert_eq!(normalize_place("GU1", &only_one).county.as_deref(), Some("England"));
    }

    #[test]
    fn first_matching_component_wins() {
        let raw = place(
            "1 A Road, Hull, UK",
            vec![
                component("A Road", &["route"]),
                component("B Road", &["route"]),
                component("Hull", &["locality"]),
                component("Éire", &["country"]),
            ],
        );
        let address = normalize_place("HU1", &raw);
        assert_eq!(address.street_name.as_deref(), Some("A Road"));
        assert_eq!(address.country.as_deref(), Some("Éire"));
    }

    #[test]
    fn postcode_falls_back_to_uppercased_query() {
        let raw = place(
            "1 Green Lane, Guildford, UK",
            vec![component("Green Lane", &["route"]), component("Guildford", &["locality"])],
        );
        assert_eq!(normalize_place("gu1 4ab", &raw).postcode, "GU1 4AB");
    }

    #[test]
    fn filtering_preserves_order_and_never_grows() {
        let places = vec![
            place("1 A Street, Leeds, UK", vec![
                component("A Street", &["route"]),
                component("Leeds", &["locality"]),
            ]),
            // no town
            place("2 B Street, UK", vec![component("B Street", &["route"])]),
            place("3 C Street, York, UK", vec![
                component("C Street", &["route"]),
                component("York", &["locality"]),
            ]),
        ];

        let out = normalize_places("LS1", &places);
        assert!(out.len() <= places.len());
        let lines: Vec<_> = out.iter().map(|a| a.address_line_1.as_str()).collect();
        assert_eq!(lines, vec!["A Street", "C Street"]);
        assert!(out.iter().all(is_usable));
    }

    #[test]
    fn empty_place_list_yields_empty_output() {
        assert!(normalize_places("SW1A 1AA", &[]).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let places = vec![place(
            "Flat 1, 5 Queen Street, Cardiff, UK",
            vec![
                component("1", &["subpremise"]),
                component("5", &["street_number"]),
                component("Queen Street", &["route"]),
                component("Cardiff", &["locality"]),
            ],
        )];
        assert_eq!(
            normalize_places("CF10", &places),
            normalize_places("CF10", &places)
        );
    }
}

use crate::domain::model::{Locality, LocalityField, RawLocalitiesResponse};

/// Flattens any upstream shape into an ordered locality list.
///
/// Absence of data is an ordinary empty result. Upstream order is kept and
/// nothing is deduplicated.
pub fn normalize(raw: RawLocalitiesResponse) -> Vec<Locality> {
    match raw {
        RawLocalitiesResponse::Direct(field) | RawLocalitiesResponse::Nested(field) => {
            into_list(field)
        }
        RawLocalitiesResponse::Empty => Vec::new(),
    }
}

fn into_list(field: LocalityField) -> Vec<Locality> {
    match field {
        LocalityField::Many(localities) => localities,
        LocalityField::One(locality) => vec![locality],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(value: Value) -> RawLocalitiesResponse {
        serde_json::from_value(value).unwrap()
    }

    fn sydney() -> Value {
        json!({"location": "SYDNEY", "postcode": "2000", "state": "NSW"})
    }

    #[test]
    fn test_empty_inputs_normalize_to_empty_list() {
        assert!(normalize(parse(Value::Null)).is_empty());
        assert!(normalize(parse(json!({}))).is_empty());
        assert!(normalize(RawLocalitiesResponse::default()).is_empty());
    }

    #[test]
    fn test_all_shapes_of_same_list_are_equivalent() {
        let expected = vec![Locality::new("SYDNEY", "2000", "NSW")];

        let shapes = [
            json!({"localities": {"locality": sydney()}}),
            json!({"localities": {"locality": [sydney()]}}),
            json!({"data": {"localities": {"locality": sydney()}}}),
            json!({"data": {"localities": {"locality": [sydney()]}}}),
        ];

        for shape in shapes {
            assert_eq!(normalize(parse(shape.clone())), expected, "shape: {}", shape);
        }
    }

    #[test]
    fn test_direct_shape_takes_precedence_over_nested() {
        let raw = parse(json!({
            "localities": {"locality": sydney()},
            "data": {"localities": {"locality": {"location": "PARRAMATTA", "postcode": "2150", "state": "NSW"}}}
        }));

        let localities = normalize(raw);
        assert_eq!(localities.len(), 1);
        assert_eq!(localities[0].location, "SYDNEY");
    }

    #[test]
    fn test_preserves_upstream_order_and_duplicates() {
        let raw = parse(json!({"localities": {"locality": [
            {"location": "BROADWAY", "postcode": 2581, "state": "NSW"},
            {"location": "BROADWATER", "postcode": 2472, "state": "NSW"},
            {"location": "BROADWAY", "postcode": 2581, "state": "NSW"}
        ]}}));

        let names: Vec<String> = normalize(raw).into_iter().map(|l| l.location).collect();
        assert_eq!(names, vec!["BROADWAY", "BROADWATER", "BROADWAY"]);
    }

    #[test]
    fn test_empty_array_normalizes_to_empty_list() {
        assert!(normalize(parse(json!({"localities": {"locality": []}}))).is_empty());
        assert!(normalize(parse(json!({"localities": ""}))).is_empty());
    }
}

use colltools::{List, Map, Value};

/// Builds a mapping nested `depth` levels deep with `fanout` keys per level
/// Each level also carries a short list so both container shapes are exercised
pub fn nested_document(depth: usize, fanout: usize) -> Value {
    if depth == 0 {
        return Value::from("leaf");
    }

    let mut map = Map::new();
    for i in 0..fanout {
        map.insert(format!("key_{i}"), nested_document(depth - 1, fanout.min(2)));
    }
    map.insert("items", (0..fanout).collect::<List>());
    Value::from(map)
}

/// Builds a flat mapping with `width` text entries
/// Each entry has format "key_N" -> "value_N" where N is the entry index
pub fn wide_document(width: usize) -> Value {
    (0..width)
        .map(|i| (format!("key_{i}"), format!("value_{i}")))
        .collect::<Map>()
        .into()
}

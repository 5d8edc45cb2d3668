use super::*;

fn detail(json: serde_json::Value) -> OrderDetail {
    serde_json::from_value(json).unwrap()
}

#[test]
fn detail_line_shows_title_and_price() {
    let line = detail(serde_json::json!({
        "ID_OrderDetails": 1,
        "Publication": { "ID_Publication": 3, "Title": "Les Paul", "Price": 1500 }
    }));
    assert_eq!(detail_line(&line), "Les Paul - $1500");
}

#[test]
fn detail_line_marks_deleted_publication() {
    let line = detail(serde_json::json!({ "ID_OrderDetails": 2, "Publication": null }));
    assert_eq!(detail_line(&line), "Producto eliminado - Precio a consultar");
}

#[test]
fn shipping_line_joins_known_parts() {
    let line = detail(serde_json::json!({
        "ID_OrderDetails": 3,
        "nombre": "Ana",
        "calle": "San Martín 123",
        "dpto": "",
        "cp": "2000"
    }));
    assert_eq!(shipping_line(&line).as_deref(), Some("Ana · San Martín 123 · 2000"));
}

#[test]
fn shipping_line_without_data_is_none() {
    let line = detail(serde_json::json!({ "ID_OrderDetails": 4 }));
    assert_eq!(shipping_line(&line), None);
}

use delimit::CheckOptions;
use serde_json::json;

#[test]
fn reports_serialize_with_tagged_diagnostics() {
    let report = CheckOptions::symbols().check(")(");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "mode": "symbols",
            "balanced": false,
            "halted": false,
            "diagnostics": [
                {
                    "kind": "unexpected_close",
                    "close": {
                        "kind": "close",
                        "symbol": ")",
                        "position": { "offset": 0, "line": 1, "column": 1 },
                    },
                },
                {
                    "kind": "unclosed_at_eof",
                    "pending": [{
                        "kind": "open",
                        "symbol": "(",
                        "position": { "offset": 1, "line": 1, "column": 2 },
                    }],
                    "total": 1,
                },
            ],
        })
    );
}

#[test]
fn tag_symbols_serialize_as_names() {
    let report = CheckOptions::tags().check("<div><span></div>");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["mode"], "tags");
    assert_eq!(value["diagnostics"][0]["kind"], "mismatch");
    assert_eq!(value["diagnostics"][0]["expected"], "span");
    assert_eq!(value["diagnostics"][0]["close"]["symbol"], "div");
    assert_eq!(value["diagnostics"][0]["close"]["position"]["line"], 1);
}

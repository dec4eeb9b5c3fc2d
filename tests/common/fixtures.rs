//! Static feed payloads used across harnesses.
//!
//! Each constant is a complete response body in one of the shapes the feed
//! has been seen to return. They share the same two events where possible so
//! harnesses can compare shapes against each other.

/// The canonical shape: records wrapped under `data`, Indonesian field names.
pub const FEED_WRAPPED_DATA: &str = r#"{
  "status": "ok",
  "data": [
    {
      "tanggal": "01 Jan 2024",
      "jam": "10:00:00 WIB",
      "magnitudo": "5.2",
      "kedalaman": "10 km",
      "lintang": "-6.20",
      "bujur": "106.80",
      "wilayah": "Laut Jawa",
      "potensi": "Tidak berpotensi tsunami",
      "dirasakan": "III Jakarta",
      "shakemap": "https://feed.test/20240101.mmi.jpg",
      "sumber": "BMKG"
    },
    {
      "tanggal": "02 Jan 2024",
      "jam": "22:15:00 WIB",
      "magnitudo": "6,4 SR",
      "kedalaman": "35 km",
      "koordinat": "-8.10, 115.20",
      "wilayah": "Bali Utara",
      "potensi": "Berpotensi TSUNAMI",
      "intensitas": "Intensitas: V-VI"
    }
  ]
}"#;

/// The same two events as a bare top-level array.
pub const FEED_BARE_ARRAY: &str = r#"[
  {
    "tanggal": "01 Jan 2024",
    "jam": "10:00:00 WIB",
    "magnitudo": "5.2",
    "kedalaman": "10 km",
    "lintang": "-6.20",
    "bujur": "106.80",
    "wilayah": "Laut Jawa",
    "potensi": "Tidak berpotensi tsunami",
    "dirasakan": "III Jakarta",
    "shakemap": "https://feed.test/20240101.mmi.jpg",
    "sumber": "BMKG"
  },
  {
    "tanggal": "02 Jan 2024",
    "jam": "22:15:00 WIB",
    "magnitudo": "6,4 SR",
    "kedalaman": "35 km",
    "koordinat": "-8.10, 115.20",
    "wilayah": "Bali Utara",
    "potensi": "Berpotensi TSUNAMI",
    "intensitas": "Intensitas: V-VI"
  }
]"#;

/// English field names, numeric values, records under `reports`.
pub const FEED_ENGLISH: &str = r#"{
  "reports": [
    {
      "ID": "ev-1001",
      "date": "2024-03-05",
      "time": "04:12:09",
      "Magnitude": 4.7,
      "depth": "12 km",
      "latitude": -2.51,
      "longitude": 140.7,
      "place": "Jayapura, Papua",
      "warning": "No tsunami threat",
      "felt": "IV-V (MMI)",
      "updated": "2024-03-05T04:20:00Z"
    }
  ]
}"#;

/// Records keyed by event id, no wrapper and no id field inside.
pub const FEED_KEYED_MAP: &str = r#"{
  "ev-2001": {"tanggal": "10 Feb 2024", "magnitudo": "3.1", "wilayah": "Garut"},
  "ev-2002": {"tanggal": "11 Feb 2024", "magnitudo": "4.0", "wilayah": "Sukabumi"}
}"#;

/// A single record wrapped under `gempa` as an object rather than an array.
pub const FEED_SINGLE_NESTED: &str = r#"{
  "Infogempa": {
    "gempa": {
      "Tanggal": "15 Apr 2024",
      "Jam": "08:00:00 WIB",
      "Magnitude": "5.9",
      "Kedalaman": "20 km",
      "Coordinates": "-7.50,110.30",
      "Wilayah": "Yogyakarta",
      "Potensi": "Tidak berpotensi tsunami",
      "Dirasakan": "IV Yogyakarta"
    }
  }
}"#;

/// Bodies that must normalise to nothing without raising.
pub const GARBAGE_BODIES: &[&str] = &[
    "",
    "   \n\t",
    "not json",
    "{}",
    "[]",
    "null",
    "42",
    "\"laporan\"",
    "<html><body>502 Bad Gateway</body></html>",
    r#"{"data": []}"#,
    r#"{"data": [1, "two", null, []]}"#,
    r#"[{}, {"a": null, "b": "", "c": "NULL"}]"#,
];

/// Payload from the end-to-end example: Indonesian keys under `data` plus
/// one unmapped field.
pub const FEED_END_TO_END: &str = r#"{"data":[{"tanggal":"2024-01-01","jam":"10:00","magnitudo":"5.2","lintang":"-6.2","bujur":"106.8","notes_extra":"x"}]}"#;

/// Build a body with `count` synthetic records under `data`.
pub fn synthetic_feed(count: usize) -> String {
    let records: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "tanggal": format!("{:02} Jan 2024", i % 28 + 1),
                "jam": format!("{:02}:{:02}:00 WIB", i % 24, i % 60),
                "magnitudo": format!("{}.{}", 3 + i % 4, i % 10),
                "kedalaman": format!("{} km", 5 + i % 100),
                "lintang": format!("-{}.{}", i % 10, i % 7),
                "bujur": format!("1{}.{}", 10 + i % 30, i % 9),
                "wilayah": format!("Region {i}"),
                "potensi": if i % 5 == 0 { "Berpotensi tsunami" } else { "Tidak berpotensi tsunami" },
                "skala_mmi_lokal": "III",
                "sumber": "BMKG",
            })
        })
        .collect();
    serde_json::json!({ "data": records }).to_string()
}

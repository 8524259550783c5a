use super::{from_canonical, is_canonical_list};
use crate::domain::entities::schools::{School, Schools, StudentCount};
use crate::domain::values::payload::{as_f64, f64_field, first_str, round_to};
use serde_json::Value;

pub fn schools(payload: &Value) -> Schools {
    if is_canonical_list(payload, "schools", "name") {
        return from_canonical("schools", payload);
    }

    let Some(results) = payload.get("results").and_then(Value::as_array) else {
        return from_canonical("schools", payload);
    };

    let schools: Vec<School> = results.iter().filter(|r| r.is_object()).map(school).collect();
    Schools {
        total: schools.len() as u64,
        schools,
        ..Schools::default()
    }
}

fn school(raw: &Value) -> School {
    let present = |key: &str| raw.get(key).filter(|v| !v.is_null());
    let number = |key: &str| present(key).and_then(as_f64);

    let naplan_score = number("naplan");
    let boys = f64_field(raw, "boys").max(0.0) as u64;
    let girls = f64_field(raw, "girls").max(0.0) as u64;

    School {
        name: first_str(raw, &["name"], ""),
        school_type: first_str(raw, &["school_level_type"], "Unknown"),
        sector: first_str(raw, &["school_sector_type"], "Unknown"),
        naplan_score,
        rating: naplan_score.map(|score| round_to(score * 5.0, 1)),
        naplan_rank: present("naplan_rank").cloned(),
        socioeconomic_score: number("socioeconomic"),
        socioeconomic_rank: present("socioeconomic_rank").cloned(),
        attendance_rate: number("attendance_rate"),
        students: (boys > 0 || girls > 0).then_some(StudentCount {
            boys,
            girls,
            total: boys + girls,
        }),
        ..School::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_raw_school() {
        let raw = json!({
            "results": [{
                "name": "Belmont North Public School",
                "school_level_type": "Primary",
                "school_sector_type": "Government",
                "naplan": 0.72,
                "naplan_rank": "top 30%",
                "socioeconomic": null,
                "boys": 150,
                "girls": 140,
            }]
        });
        let s = schools(&raw);
        assert_eq!(s.total, 1);
        let school = &s.schools[0];
        assert_eq!(school.school_type, "Primary");
        assert_eq!(school.naplan_score, Some(0.72));
        assert_eq!(school.rating, Some(3.6));
        assert_eq!(school.naplan_rank, Some(json!("top 30%")));
        assert_eq!(school.socioeconomic_score, None);
        assert_eq!(school.students.as_ref().map(|s| s.total), Some(290));
    }

    #[test]
    fn test_absent_optionals_are_omitted_from_output() {
        let s = schools(&json!({"results": [{"name": "Tiny School"}]}));
        let out = serde_json::to_value(&s).unwrap();
        let school = &out["schools"][0];
        assert_eq!(school["type"], "Unknown");
        assert_eq!(school["sector"], "Unknown");
        for key in ["naplanScore", "rating", "naplanRank", "students", "attendanceRate"] {
            assert!(school.get(key).is_none(), "{key} should be omitted");
        }
    }

    #[test]
    fn test_round_trip_is_stable() {
        let raw = json!({"results": [{"name": "A", "naplan": 0.5, "boys": 3}]});
        let once = schools(&raw);
        let twice = schools(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }
}

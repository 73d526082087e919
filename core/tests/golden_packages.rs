use csv::ReaderBuilder;
use trainlog_core::build_training;

// Gullverdier per scenario, tre desimaler slik rapporten rendrer dem.
const GOLDEN: &str = "\
code;action;duration;weight;f4;f5;distance;speed;calories
RUN;15000;1;75;;;9.750;9.750;797.805
WLK;9000;1;75;180;;5.850;5.850;349.252
SWM;720;1;80;25;40;0.994;1.000;336.000
";

#[test]
fn golden_scenarios() {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(GOLDEN.as_bytes());

    for rec in rdr.records() {
        let rec = rec.unwrap();
        let code = rec[0].to_string();

        let mut data: Vec<f64> = Vec::new();
        for i in 1..=5 {
            if !rec[i].is_empty() {
                data.push(rec[i].parse().unwrap());
            }
        }

        let report = build_training(&code, &data).unwrap().training_info();
        assert_eq!(format!("{:.3}", report.distance_km), &rec[6], "distanse {code}");
        assert_eq!(format!("{:.3}", report.speed_kmh), &rec[7], "snittfart {code}");
        assert_eq!(format!("{:.3}", report.calories_kcal), &rec[8], "kalorier {code}");
    }
}

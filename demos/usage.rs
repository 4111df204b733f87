use karnaugh::*;

fn main() -> Result<(), KmapError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("A simple example!");

    let json = r#"{
        "variables": ["A", "B", "C", "D"],
        "minterms": [1, 0, 0, 1, 0, 1, "x", 0, 1, 1, 0, 0, 0, 0, 1, "x"],
        "outputMode": "sop",
        "order": "truth_table"
    }"#;
    let request: KmapRequest = KmapRequest::from_json(json)?;
    let kmap = request.build(&KmapConfig::default())?;

    println!("{}", kmap);
    println!("{}", kmap.table(&CSV_TABLE_STYLE));
    println!("{}", kmap.canonical());

    let response = serde_json::to_string_pretty(&kmap.to_response())?;
    println!("{}", response);

    println!("kmap.py {}", kmap.render_args()?.to_args().join(" "));

    let (names, values) = parse_definition::<Cell>("x y z : 0 1 1 0 1 x 0 1")?;
    let kmap = Kmap::new(VariableSet::from_names(names)?, values)?.with_mode(OutputMode::Pos);
    println!("{}\n{}", kmap, kmap.canonical());

    Ok(())
}

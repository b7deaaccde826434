use anyhow::Context;
use chrono::NaiveDate;
use vivo_people_sync::{HrRecord, PeopleSync, RdfStore, SyncConfig};

const SEED_GRAPH: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix vivo: <http://vivoweb.org/ontology/core#> .
@prefix vcard: <http://www.w3.org/2006/vcard/ns#> .
@prefix obo: <http://purl.obolibrary.org/obo/> .
@prefix ufv: <http://vivo.ufl.edu/ontology/vivo-ufl/> .
@prefix ind: <http://vivo.ufl.edu/individual/> .

ind:n8763427 rdf:type foaf:Organization ;
    rdfs:label "Clinical and Translational Science Institute" .

ind:n25674 rdf:type foaf:Person, vivo:FacultyMember ;
    rdfs:label "Conlon, Michael" ;
    ufv:ufid "12345678" ;
    ufv:homeDept ind:n8763427 ;
    obo:ARG_2000028 ind:n6754 ;
    vivo:relatedBy ind:n9921 .

ind:n6754 rdf:type vcard:Individual ;
    obo:ARG_2000029 ind:n25674 ;
    vcard:hasName ind:n6755 ;
    vcard:hasTelephone ind:n6756 .
ind:n6755 rdf:type vcard:Name ;
    vcard:givenName "Michael" ;
    vcard:familyName "Conlon" .
ind:n6756 rdf:type vcard:Telephone ;
    vcard:telephone "(352) 273-8700" .

ind:n9921 rdf:type vivo:Position, vivo:FacultyPosition ;
    rdfs:label "Associate Professor" ;
    vivo:rank "1" ;
    vivo:relates ind:n25674, ind:n8763427 .
"#;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("VIVO People Sync v{}", vivo_people_sync::version());
    println!("==========================================");

    let config = match std::env::args().nth(1) {
        Some(path) => SyncConfig::from_path(&path).with_context(|| format!("loading {}", path))?,
        None => SyncConfig::default(),
    };
    let catalog = config.catalog();
    let minter = config.minter();

    let mut store = RdfStore::new();
    let loaded = store.load_turtle(SEED_GRAPH).context("loading seed graph")?;
    println!("Seeded store with {} triples", loaded);

    let record = HrRecord {
        ufid: "12345678".to_string(),
        person_type: Some("http://vivoweb.org/ontology/core#FacultyMember".to_string()),
        display_name: Some("Conlon, Michael".to_string()),
        first_name: Some("Michael".to_string()),
        last_name: Some("Conlon".to_string()),
        middle_name: Some("Anthony".to_string()),
        homedept_uri: Some("http://vivo.ufl.edu/individual/n8763427".to_string()),
        phone: Some("352 273 8700".to_string()),
        fax: Some("352-273-8701".to_string()),
        email: Some("mconlon@ufl.edu".to_string()),
        jobcode_description: Some("ASOC PROF".to_string()),
        salary_plan: Some("FA09".to_string()),
        start_date: NaiveDate::from_ymd_opt(2013, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
        ..Default::default()
    };
    let source = record.into_source_person();

    for run in 1..=2 {
        println!("\n=== Run {} ===", run);
        let reconciliation = {
            let sync = PeopleSync::new(&store, &store, minter.as_ref(), &catalog)
                .with_contact(config.fetch_contact);
            sync.reconcile(&source, &sync.ufid_dictionary())?
        };
        let delta = &reconciliation.delta;
        println!(
            "{} {}: {} to add, {} to remove",
            if reconciliation.created { "Created" } else { "Updated" },
            reconciliation.person_uri,
            delta.add.len(),
            delta.sub.len()
        );
        println!("--- add ---\n{}", delta.add_document(config.output_format)?);
        println!("--- sub ---\n{}", delta.sub_document(config.output_format)?);

        let changed = store.apply(delta);
        println!("Applied {} changes, store now holds {} triples", changed, store.len());
    }

    Ok(())
}

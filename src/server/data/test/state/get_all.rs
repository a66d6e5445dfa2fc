use super::*;

/// Tests listing states.
///
/// Verifies that all states are returned ordered alphabetically by name regardless of
/// insertion order.
///
/// Expected: Ok(Vec<State>) sorted by name
#[tokio::test]
async fn returns_states_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::state::StateFactory::new(db)
        .name("Rio de Janeiro")
        .abbreviation("RJ")
        .build()
        .await?;
    factory::state::StateFactory::new(db)
        .name("Minas Gerais")
        .abbreviation("MG")
        .build()
        .await?;

    let states = StateRepository::new(db).get_all().await?;

    assert_eq!(states.len(), 2);
    assert_eq!(states[0].abbreviation, "MG");
    assert_eq!(states[1].abbreviation, "RJ");

    Ok(())
}

/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_states() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let states = StateRepository::new(db).get_all().await?;

    assert!(states.is_empty());

    Ok(())
}

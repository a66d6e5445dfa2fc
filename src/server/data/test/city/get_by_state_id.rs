use super::*;

/// Tests listing the cities of a state.
///
/// Verifies that only cities of the requested state are returned, ordered by name.
///
/// Expected: Ok(Vec<City>) containing only the state's cities
#[tokio::test]
async fn returns_only_cities_of_state_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = factory::create_state(db).await?;
    let other_state = factory::create_state(db).await?;

    factory::city::CityFactory::new(db, state.id)
        .name("Santos")
        .build()
        .await?;
    factory::city::CityFactory::new(db, state.id)
        .name("Campinas")
        .build()
        .await?;
    factory::city::CityFactory::new(db, other_state.id)
        .name("Belo Horizonte")
        .build()
        .await?;

    let cities = CityRepository::new(db).get_by_state_id(state.id).await?;

    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].name, "Campinas");
    assert_eq!(cities[1].name, "Santos");
    assert!(cities.iter().all(|c| c.state_id == state.id));

    Ok(())
}

/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_state_without_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = factory::create_state(db).await?;

    let cities = CityRepository::new(db).get_by_state_id(state.id).await?;

    assert!(cities.is_empty());

    Ok(())
}

use super::*;

/// Expected: Ok(CityWithState)
#[tokio::test]
async fn gets_city_with_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (state, city) = factory::create_city_with_state(db).await?;

    let found = GeoService::new(db).get_city(city.id).await.unwrap();

    assert_eq!(found.city.id, city.id);
    assert_eq!(found.state.id, state.id);

    let dto = found.into_dto();
    assert_eq!(dto.name, city.name);
    assert_eq!(dto.state.abbreviation, state.abbreviation);

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GeoService::new(db).get_city(99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

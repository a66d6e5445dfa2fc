use super::*;

/// Expected: Ok(true) for an existing city, Ok(false) otherwise
#[tokio::test]
async fn reports_whether_city_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;

    let repo = CityRepository::new(db);
    assert!(repo.exists(city.id).await?);
    assert!(!repo.exists(city.id + 1000).await?);

    Ok(())
}

use super::*;

/// Expected: Ok(()) then Err(AppError::NotFound) on lookup
#[tokio::test]
async fn deletes_existing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    let unit = factory::create_partner_unit(db, city.id).await?;
    let service = PartnerUnitService::new(db);

    assert!(service.delete(unit.id).await.is_ok());
    assert!(matches!(
        service.get(unit.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PartnerUnitService::new(db).delete(99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

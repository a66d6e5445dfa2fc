use super::*;

/// Tests pagination metadata for a city's units.
///
/// Expected: Ok(PaginatedPartnerUnits) with total and page count
#[tokio::test]
async fn paginates_units_with_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    for _ in 0..5 {
        factory::create_partner_unit(db, city.id).await?;
    }

    let page = PartnerUnitService::new(db)
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: 1,
            per_page: 2,
        })
        .await
        .unwrap();

    assert_eq!(page.units.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

/// Expected: per_page clamped into 1..=MAX_PER_PAGE
#[tokio::test]
async fn clamps_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    factory::create_partner_unit(db, city.id).await?;
    let service = PartnerUnitService::new(db);

    let zero = service
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: 0,
            per_page: 0,
        })
        .await
        .unwrap();
    assert_eq!(zero.per_page, 1);
    assert_eq!(zero.total_pages, 1);

    let huge = service
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: 0,
            per_page: 10_000,
        })
        .await
        .unwrap();
    assert_eq!(huge.per_page, MAX_PER_PAGE);

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PartnerUnitService::new(db)
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: 99999,
            page: 0,
            per_page: 10,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a page whose row offset overflows is rejected instead of reaching the query.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_page_with_overflowing_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    factory::create_partner_unit(db, city.id).await?;

    let service = PartnerUnitService::new(db);

    let result = service
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: u64::MAX,
            per_page: MAX_PER_PAGE,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: i64::MAX as u64,
            per_page: 2,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a far but representable page returns no units.
///
/// Expected: Ok(PaginatedPartnerUnits) with an empty page
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city) = factory::create_city_with_state(db).await?;
    factory::create_partner_unit(db, city.id).await?;

    let page = PartnerUnitService::new(db)
        .list_by_city(GetPaginatedPartnerUnitsParam {
            city_id: city.id,
            page: 1_000_000,
            per_page: 10,
        })
        .await
        .unwrap();

    assert!(page.units.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}

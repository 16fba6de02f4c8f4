use std::sync::Arc;

use chefbuddy_shared::{Error, MemoryStore, SqliteStore, recipe::Ingredient};
use chefbuddy_shopping::{NewShoppingItem, ShoppingList};
use temp_dir::TempDir;

fn memory_list() -> ShoppingList<Arc<MemoryStore>> {
    ShoppingList::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn merges_by_name_and_unit_ignoring_case() -> anyhow::Result<()> {
    let list = memory_list();

    list.add_ingredients(&[
        Ingredient::new("Flour", 200.0, "g"),
        Ingredient::new("milk", 300.0, "ml"),
        Ingredient::named("Eggs"),
    ])
    .await?;
    let touched = list
        .add_ingredients(&[
            Ingredient::new("flour", 50.0, "G"),
            Ingredient::new("Milk", 1.0, "cup"),
            Ingredient::named("eggs"),
            Ingredient::named("   "),
        ])
        .await?;

    assert_eq!(touched.len(), 3);

    let items = list.items().await?;
    let lines: Vec<_> = items
        .iter()
        .map(|item| (item.name.as_str(), item.quantity, item.unit.as_str()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Flour", 250.0, "g"),
            ("milk", 300.0, "ml"),
            ("Eggs", 2.0, ""),
            ("Milk", 1.0, "cup"),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn duplicate_ingredients_in_one_batch_merge() -> anyhow::Result<()> {
    let list = memory_list();

    let touched = list
        .add_ingredients(&[
            Ingredient::new("rice", 1.0, "cup"),
            Ingredient::new("Rice", 2.0, "cup"),
        ])
        .await?;

    assert_eq!(touched.len(), 1);
    assert_eq!(touched[0].quantity, 3.0);
    assert_eq!(list.items().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn toggle_remove_and_clear() -> anyhow::Result<()> {
    let list = memory_list();
    let bread = list.add_item(NewShoppingItem::new(" Bread ", 1.0, "loaf")).await?;
    let jam = list.add_item(NewShoppingItem::new("Jam", 1.0, "jar")).await?;

    assert_eq!(bread.name, "Bread");
    assert!(list.toggle(&bread.id).await?);
    assert!(!list.toggle(&bread.id).await?);
    assert!(list.toggle(&bread.id).await?);

    let items = list.items().await?;
    assert!(items[0].checked);
    assert!(!items[1].checked);

    list.remove(&jam.id).await?;
    assert!(matches!(list.remove(&jam.id).await, Err(Error::NotFound(_))));
    assert!(matches!(list.toggle("missing").await, Err(Error::NotFound(_))));

    list.clear().await?;
    assert!(list.items().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn add_item_validates() -> anyhow::Result<()> {
    let list = memory_list();

    let blank = list.add_item(NewShoppingItem::new("  ", 1.0, "")).await;
    assert!(matches!(blank, Err(Error::Validate(_))));

    let zero = list.add_item(NewShoppingItem::new("Salt", 0.0, "")).await;
    assert!(matches!(zero, Err(Error::Validate(_))));

    assert!(list.items().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn unusable_quantities_count_as_one() -> anyhow::Result<()> {
    let list = memory_list();

    let touched = list
        .add_ingredients(&[
            Ingredient::new("Saffron", f64::NAN, "g"),
            Ingredient::new("Chili", f64::INFINITY, ""),
            Ingredient::new("Basil", -5.0, "bunch"),
        ])
        .await?;

    assert_eq!(touched.len(), 3);

    let items = list.items().await?;
    let quantities: Vec<_> = items
        .iter()
        .map(|item| (item.name.as_str(), item.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![("Saffron", 1.0), ("Chili", 1.0), ("Basil", 1.0)]
    );

    Ok(())
}

#[tokio::test]
async fn export_lists_every_line() -> anyhow::Result<()> {
    let list = memory_list();
    list.add_ingredients(&[
        Ingredient::new("Spaghetti", 200.0, "g"),
        Ingredient::named("Lemon"),
        Ingredient::new("Olive oil", 1.5, "tbsp"),
    ])
    .await?;

    assert_eq!(
        list.export_text().await?,
        "- Spaghetti 200 g\n- Lemon 1\n- Olive oil 1.5 tbsp"
    );
    assert_eq!(memory_list().export_text().await?, "");

    Ok(())
}

#[tokio::test]
async fn persists_in_sqlite() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

    {
        let store = SqliteStore::connect(&url, 1).await?;
        let list = ShoppingList::new(store);
        list.add_ingredients(&[Ingredient::new("Tofu", 200.0, "g")]).await?;
        list.add_ingredients(&[Ingredient::new("tofu", 100.0, "g")]).await?;
        assert_eq!(list.items().await?.len(), 1);
    }

    let list = ShoppingList::new(SqliteStore::connect(&url, 1).await?);
    let items = list.items().await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 300.0);

    Ok(())
}

use diesel::prelude::*;

use crate::domain::news::{News, NewNews};
use crate::domain::types::NewsId;
use crate::models::category::Category as DbCategory;
use crate::models::news::{News as DbNews, NewNews as DbNewNews};
use crate::repository::{Entity, NewsRepository, Repository, RepositoryError, RepositoryResult};

impl Entity for News {
    type Id = NewsId;
    type New = NewNews;
}

fn with_category(row: (DbNews, DbCategory)) -> RepositoryResult<News> {
    let (db_news, db_category) = row;
    let mut news: News = db_news.try_into()?;
    news.category = Some(db_category.try_into()?);
    Ok(news)
}

impl Repository<News> for NewsRepository {
    fn list_all(&self) -> RepositoryResult<Vec<News>> {
        use crate::schema::{categories, news};

        let mut conn = self.conn()?;

        let items = news::table
            .inner_join(categories::table)
            .load::<(DbNews, DbCategory)>(&mut conn)?
            .into_iter()
            .map(with_category)
            .collect::<RepositoryResult<Vec<News>>>()?;

        Ok(items)
    }

    fn get_by_id(&self, id: NewsId) -> RepositoryResult<Option<News>> {
        use crate::schema::{categories, news};

        let mut conn = self.conn()?;

        let row = news::table
            .inner_join(categories::table)
            .filter(news::id.eq(id.get()))
            .first::<(DbNews, DbCategory)>(&mut conn)
            .optional()?;

        row.map(with_category).transpose()
    }

    fn create(&self, new: &NewNews) -> RepositoryResult<News> {
        use crate::schema::news;

        let mut conn = self.conn()?;
        let db_news: DbNewNews = new.clone().into();

        // The relation is only resolved on read paths; the created row is
        // returned with `category` unset.
        let created = diesel::insert_into(news::table)
            .values(db_news)
            .get_result::<DbNews>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update(&self, news_item: &News) -> RepositoryResult<()> {
        use crate::schema::news;

        let mut conn = self.conn()?;

        let affected = diesel::update(news::table.filter(news::id.eq(news_item.id.get())))
            .set((
                news::title.eq(&news_item.title),
                news::content.eq(&news_item.content),
                news::created_at.eq(news_item.created_at),
                news::category_id.eq(news_item.category_id.get()),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotUpdated);
        }
        Ok(())
    }

    fn delete(&self, id: NewsId) -> RepositoryResult<usize> {
        use crate::schema::news;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(news::table.filter(news::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}

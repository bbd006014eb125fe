use crate::{model::Partner, prelude::*, repo::Repository};

pub struct Partners<'a, R> {
  repo: &'a R,
}

impl<'a, R: Repository<Partner>> Partners<'a, R> {
  pub fn new(repo: &'a R) -> Self {
    Self { repo }
  }

  pub async fn all(&self) -> Result<Vec<Partner>> {
    let partners = self.repo.all().await?;
    debug!("listing {} partners", partners.len());
    Ok(partners)
  }
}

use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::{
  entity::{limit, partner},
  prelude::*,
  utils::{self, format_date},
};

/// A partner together with its limit history, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Partner {
  pub id: Uuid,
  pub name: String,
  pub is_active: bool,
  pub number_issued_promo_codes: i32,
  pub limits: Vec<limit::Model>,
}

impl Partner {
  pub fn new(model: partner::Model, limits: Vec<limit::Model>) -> Self {
    let partner::Model { id, name, is_active, number_issued_promo_codes } =
      model;
    Self { id, name, is_active, number_issued_promo_codes, limits }
  }

  pub fn active_limit(&self) -> Option<&limit::Model> {
    self.limits.iter().find(|limit| limit.is_active())
  }

  pub fn limit(&self, id: Uuid) -> Option<&limit::Model> {
    self.limits.iter().find(|limit| limit.id == id)
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLimitReq {
  pub limit: i32,
  #[serde(default, deserialize_with = "end_date")]
  pub end_date: Option<DateTime>,
}

fn end_date<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<Option<DateTime>, D::Error> {
  let Some(raw) = Option::<String>::deserialize(deserializer)? else {
    return Ok(None);
  };
  utils::parse_date(&raw)
    .map(Some)
    .ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitResp {
  pub id: Uuid,
  pub partner_id: Uuid,
  pub limit: i32,
  pub create_date: String,
  pub end_date: Option<String>,
  pub cancel_date: Option<String>,
}

impl From<&limit::Model> for LimitResp {
  fn from(limit: &limit::Model) -> Self {
    Self {
      id: limit.id,
      partner_id: limit.partner_id,
      limit: limit.limit,
      create_date: format_date(limit.create_date),
      end_date: limit.end_date.map(format_date),
      cancel_date: limit.cancel_date.map(format_date),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResp {
  pub id: Uuid,
  pub name: String,
  pub number_issued_promo_codes: i32,
  pub is_active: bool,
  pub partner_limits: Vec<LimitResp>,
}

impl From<&Partner> for PartnerResp {
  fn from(partner: &Partner) -> Self {
    Self {
      id: partner.id,
      name: partner.name.clone(),
      number_issued_promo_codes: partner.number_issued_promo_codes,
      is_active: partner.is_active,
      partner_limits: partner.limits.iter().map(LimitResp::from).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 5, 9).unwrap()
  }

  fn partner() -> Partner {
    let id = Uuid::new_v4();
    let limit = |create_date, cancel_date| limit::Model {
      id: Uuid::new_v4(),
      partner_id: id,
      limit: 100,
      create_date,
      end_date: None,
      cancel_date,
    };
    Partner {
      id,
      name: "Toys".into(),
      is_active: false,
      number_issued_promo_codes: 3,
      limits: vec![
        limit(at(2020, 1, 1, 0), Some(at(2020, 2, 1, 0))),
        limit(at(2020, 2, 1, 0), None),
      ],
    }
  }

  #[test]
  fn finds_active_limit() {
    let partner = partner();
    let active = partner.active_limit().unwrap();
    assert_eq!(active.id, partner.limits[1].id);
    assert_eq!(partner.limit(partner.limits[0].id), Some(&partner.limits[0]));
    assert_eq!(partner.limit(Uuid::new_v4()), None);
  }

  #[test]
  fn limit_response_uses_display_format() {
    let mut partner = partner();
    partner.limits[1].create_date = at(2020, 7, 9, 15);
    partner.limits[1].end_date = Some(at(2020, 10, 9, 0));

    let resp = LimitResp::from(&partner.limits[1]);
    assert_eq!(resp.create_date, "09.07.2020 03:05:09");
    assert_eq!(resp.end_date.as_deref(), Some("09.10.2020 12:05:09"));
    assert_eq!(resp.cancel_date, None);
  }

  #[test]
  fn partner_response_reports_real_activity() {
    let partner = partner();
    let resp = PartnerResp::from(&partner);
    assert!(!resp.is_active);
    assert_eq!(resp.number_issued_promo_codes, 3);
    assert_eq!(resp.partner_limits.len(), 2);

    let body = json::to_value(&resp).unwrap();
    assert_eq!(body["numberIssuedPromoCodes"], 3);
    assert!(body["partnerLimits"][0]["cancelDate"].is_string());
  }

  #[test]
  fn set_limit_request_end_date_is_optional() {
    let req: SetLimitReq = json::from_str(r#"{"limit": 10}"#).unwrap();
    assert_eq!(req.limit, 10);
    assert_eq!(req.end_date, None);

    let req: SetLimitReq =
      json::from_str(r#"{"limit": 10, "endDate": "2021-01-01T00:00:00"}"#)
        .unwrap();
    let midnight =
      NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0);
    assert_eq!(req.end_date, midnight);

    let req: SetLimitReq =
      json::from_str(r#"{"limit": 10, "endDate": null}"#).unwrap();
    assert_eq!(req.end_date, None);
  }

  #[test]
  fn set_limit_request_accepts_offsets() {
    let parse = |end: &str| {
      let body = format!(r#"{{"limit": 10, "endDate": "{end}"}}"#);
      json::from_str::<SetLimitReq>(&body).map(|req| req.end_date)
    };

    assert_eq!(parse("2021-01-01T00:05:09Z").unwrap(), Some(at(2021, 1, 1, 0)));
    assert_eq!(
      parse("2021-01-01T03:05:09+03:00").unwrap(),
      Some(at(2021, 1, 1, 0))
    );
    assert_eq!(
      parse("2021-01-01").unwrap(),
      NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0)
    );
    assert!(parse("tomorrow").is_err());
  }
}

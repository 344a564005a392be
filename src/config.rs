use uuid::Uuid;

/// Query ids of the hosted, pre-aggregated result sets the dashboard reads.
/// Each id is fixed by the analytics platform; overriding one via env points
/// the backend at a different curated query.
#[derive(Debug, Clone)]
pub struct QueryIds {
    pub current_price: Uuid,
    pub hourly_price: Uuid,
    pub summary_metrics: Uuid,
    pub daily_activity: Uuid,
    pub developer_roles: Uuid,
    pub devs_by_org: Uuid,
    pub devs_by_repo: Uuid,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// The hourly price query covers every chain it tracks; the dashboard
    /// shows exactly one.
    pub blockchain: String,
    pub port: u16,
    pub queries: QueryIds,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("PORT is not a valid port number: {}", e))?;

        Ok(Self {
            api_base_url: std::env::var("ANALYTICS_API_BASE")
                .unwrap_or_else(|_| "https://node-api.flipsidecrypto.com".to_string()),
            blockchain: std::env::var("BLOCKCHAIN").unwrap_or_else(|_| "NEAR".to_string()),
            port,
            queries: QueryIds {
                current_price: query_id(
                    "QUERY_CURRENT_PRICE",
                    "6b0abb21-08e5-4aff-860b-7881ab5213ee",
                )?,
                hourly_price: query_id(
                    "QUERY_HOURLY_PRICE",
                    "a0ffdf60-8fb8-4305-bd7e-985c9cfbfd08",
                )?,
                summary_metrics: query_id(
                    "QUERY_SUMMARY_METRICS",
                    "dec1c3d0-c890-453d-a7d8-7ae34e76768c",
                )?,
                daily_activity: query_id(
                    "QUERY_DAILY_ACTIVITY",
                    "9268584b-cb5d-48ea-a654-dcb089c4bdaa",
                )?,
                developer_roles: query_id(
                    "QUERY_DEVELOPER_ROLES",
                    "8ad5c1ad-5d19-4b1c-a8e5-5bdb83a47538",
                )?,
                devs_by_org: query_id(
                    "QUERY_DEVS_BY_ORG",
                    "474aee08-d8b9-495a-a9d3-235825c27d7d",
                )?,
                devs_by_repo: query_id(
                    "QUERY_DEVS_BY_REPO",
                    "addc8a16-7625-4341-b9ca-7b0c06fb139c",
                )?,
            },
        })
    }
}

fn query_id(var: &str, default: &str) -> Result<Uuid, String> {
    std::env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<Uuid>()
        .map_err(|e| format!("{} is not a valid query id: {}", var, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::from_env().expect("default config");
        assert_eq!(config.blockchain, "NEAR");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.queries.hourly_price.to_string(),
            "a0ffdf60-8fb8-4305-bd7e-985c9cfbfd08"
        );
    }
}

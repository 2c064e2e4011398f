use crate::core::export::{opt_cell, TableRow};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Root of `/matches/v1/{recent,live}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "typeMatches", default)]
    pub type_matches: Vec<TypeMatches>,
}

/// One match type bucket (International, League, Domestic, Women)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeMatches {
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(rename = "seriesMatches", default)]
    pub series_matches: Vec<SeriesMatches>,
}

/// Either a series wrapper or an ad slot; ads carry no `seriesAdWrapper`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesMatches {
    #[serde(rename = "seriesAdWrapper", default)]
    pub series_ad_wrapper: Option<SeriesAdWrapper>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesAdWrapper {
    #[serde(rename = "seriesName", default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "matchInfo", default)]
    pub match_info: MatchInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchInfo {
    #[serde(rename = "matchId", default)]
    pub match_id: Option<u64>,
    #[serde(rename = "matchDesc", default)]
    pub match_desc: Option<String>,
    #[serde(default)]
    pub team1: Option<TeamInfo>,
    #[serde(default)]
    pub team2: Option<TeamInfo>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamInfo {
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
}

/// Flattened match row for display and export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub match_id: Option<u64>,
    pub series: Option<String>,
    pub description: Option<String>,
    pub teams: String,
    pub state: Option<String>,
    pub status: Option<String>,
}

fn team_name(team: &Option<TeamInfo>) -> &str {
    team.as_ref()
        .and_then(|t| t.team_name.as_deref())
        .unwrap_or("TBD")
}

/// Walk every type bucket and series, one row per match, in feed order.
pub fn flatten_matches(response: &MatchesResponse) -> Vec<MatchSummary> {
    let mut out = Vec::new();

    for type_match in &response.type_matches {
        for series in &type_match.series_matches {
            let Some(wrapper) = &series.series_ad_wrapper else {
                continue;
            };

            for entry in &wrapper.matches {
                let info = &entry.match_info;
                out.push(MatchSummary {
                    match_id: info.match_id,
                    series: wrapper.series_name.clone(),
                    description: info.match_desc.clone(),
                    teams: format!("{} vs {}", team_name(&info.team1), team_name(&info.team2)),
                    state: info.state.clone(),
                    status: info.status.clone(),
                });
            }
        }
    }

    out
}

/// `Match: <desc> | Status: <status>` from a match-center payload
pub fn detail_headline(detail: &serde_json::Value) -> Option<String> {
    let info = detail.get("matchInfo")?;
    let desc = info.get("matchDesc").and_then(|v| v.as_str()).unwrap_or("-");
    let status = info.get("status").and_then(|v| v.as_str()).unwrap_or("-");
    Some(format!("Match: {} | Status: {}", desc, status))
}

impl TableRow for MatchSummary {
    fn headers() -> &'static [&'static str] {
        &["match_id", "series", "description", "teams", "state", "status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt_cell(&self.match_id),
            opt_cell(&self.series),
            opt_cell(&self.description),
            self.teams.clone(),
            opt_cell(&self.state),
            opt_cell(&self.status),
        ]
    }
}

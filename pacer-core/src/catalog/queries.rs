//! Pipeline definitions for every catalog entry.

use crate::error::Result;
use crate::query::{
    Accumulator, Comparison, Expr, Pipeline, PipelineBuilder, Predicate, QueryParams, SortOrder,
};

pub const FULL_MARATHON: &str = "Full Marathon";
pub const HALF_MARATHON: &str = "Half Marathon";

/// Stalls need strictly more runners than this to count as popular.
pub const POPULAR_STALL_MIN_RUNNERS: u64 = 50;
/// Categories need strictly more runners than this to count as popular.
pub const POPULAR_CATEGORY_MIN_RUNNERS: u64 = 200;
pub const TOP_COMPLETION_CITIES: usize = 3;
pub const HALF_MARATHON_PODIUM: usize = 3;

/// Finished with a recorded time.
fn completed() -> Predicate {
    Predicate::and([
        Predicate::is_true("didFinish"),
        Predicate::exists("finishTime"),
    ])
}

fn completion_rates() -> PipelineBuilder {
    PipelineBuilder::new()
        .group(
            "city",
            "city",
            [
                ("totalRunners", Accumulator::Count),
                (
                    "finishedRunners",
                    Accumulator::CountWhere(Predicate::is_true("didFinish")),
                ),
            ],
        )
        .project([
            ("city", Expr::field("city")),
            ("totalRunners", Expr::field("totalRunners")),
            ("finishedRunners", Expr::field("finishedRunners")),
            (
                "completionRate",
                Expr::field("finishedRunners")
                    .multiply(Expr::literal(100))
                    .divide(Expr::field("totalRunners"))
                    .round(2),
            ),
        ])
        .sort_descending("completionRate")
}

pub fn all(_: &QueryParams) -> Result<Pipeline> {
    Ok(Pipeline::identity())
}

pub fn did_not_finish(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(Predicate::is_false("didFinish"))
        .build())
}

pub fn full_marathon_finishers(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(Predicate::and([
            Predicate::contains("categories", FULL_MARATHON),
            Predicate::is_true("didFinish"),
        ]))
        .build())
}

pub fn medal_winners(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(Predicate::is_true("medalReceived"))
        .build())
}

pub fn certificate_receivers(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(Predicate::is_true("certificateReceived"))
        .build())
}

pub fn by_city(params: &QueryParams) -> Result<Pipeline> {
    let city = params.require("city")?;
    Ok(PipelineBuilder::new()
        .filter(Predicate::eq("city", city))
        .build())
}

pub fn completion_rate_by_city(_: &QueryParams) -> Result<Pipeline> {
    Ok(completion_rates().build())
}

pub fn top_completion_cities(_: &QueryParams) -> Result<Pipeline> {
    Ok(completion_rates().limit(TOP_COMPLETION_CITIES).build())
}

pub fn fastest_by_category(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(completed())
        .unwind("categories")
        .sort_ascending("finishTime")
        .group("categories", "category", [("fastest", Accumulator::First)])
        .project([
            ("category", Expr::field("category")),
            ("name", Expr::field("fastest.name")),
            ("city", Expr::field("fastest.city")),
            ("finishTime", Expr::field("fastest.finishTime")),
        ])
        .build())
}

pub fn average_time_by_category(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(completed())
        .unwind("categories")
        .group(
            "categories",
            "category",
            [("averageTime", Accumulator::average("finishTime"))],
        )
        .project([
            ("category", Expr::field("category")),
            ("averageTime", Expr::field("averageTime").round(2)),
        ])
        .sort_ascending("averageTime")
        .build())
}

pub fn multi_category_sponsors(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .unwind("sponsors")
        .unwind("categories")
        .group(
            "sponsors",
            "sponsor",
            [("categories", Accumulator::collect_distinct("categories"))],
        )
        .project([
            ("sponsor", Expr::field("sponsor")),
            ("categoryCount", Expr::field("categories").size()),
            ("categories", Expr::field("categories")),
        ])
        .filter(Predicate::greater_than("categoryCount", 1.0))
        .sort_descending("categoryCount")
        .build())
}

pub fn multi_category_runners(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(Predicate::size_greater_than("categories", 1))
        .build())
}

pub fn top_3_half_marathon(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(completed())
        .unwind("categories")
        .filter(Predicate::eq("categories", HALF_MARATHON))
        .sort_ascending("finishTime")
        .limit(HALF_MARATHON_PODIUM)
        .project([
            ("name", Expr::field("name")),
            ("bibNumber", Expr::field("bibNumber")),
            ("city", Expr::field("city")),
            ("finishTime", Expr::field("finishTime")),
        ])
        .build())
}

pub fn popular_stalls(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .unwind("refreshmentStalls")
        .group(
            "refreshmentStalls",
            "stall",
            [("runnerCount", Accumulator::Count)],
        )
        .filter(Predicate::greater_than(
            "runnerCount",
            POPULAR_STALL_MIN_RUNNERS as f64,
        ))
        .sort_descending("runnerCount")
        .build())
}

pub fn popular_categories(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .unwind("categories")
        .group("categories", "category", [("count", Accumulator::Count)])
        .filter(Predicate::greater_than(
            "count",
            POPULAR_CATEGORY_MIN_RUNNERS as f64,
        ))
        .sort_descending("count")
        .build())
}

pub fn better_than_average(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .filter(completed())
        .unwind("categories")
        .correlated_join(
            "categories",
            Accumulator::average("finishTime"),
            "finishTime",
            Comparison::LessThan,
        )
        .project([
            ("name", Expr::field("name")),
            ("bibNumber", Expr::field("bibNumber")),
            ("city", Expr::field("city")),
            ("category", Expr::field("categories")),
            ("finishTime", Expr::field("finishTime")),
        ])
        .sort_ascending("category")
        .then_by("finishTime", SortOrder::Ascending)
        .build())
}

pub fn top_participation_cities(_: &QueryParams) -> Result<Pipeline> {
    Ok(PipelineBuilder::new()
        .group("city", "city", [("participantCount", Accumulator::Count)])
        .sort_descending("participantCount")
        .build())
}

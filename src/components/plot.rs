#![allow(non_snake_case)]

use charming::{component::{Axis, Grid, Title}, element::{AxisLabel, AxisType, Color, LineStyle, SplitLine, TextStyle, Tooltip, Trigger}, series::{Bar, Line}, Chart, WasmRenderer};
use dioxus::{logger::tracing::error, prelude::*};
use rust_decimal::prelude::ToPrimitive;
use crate::{i18n::{tr, use_language}, mock::models::{ActivityPoint, RevenuePoint}, utils::error::AppError};

static CANVAS_ID_ACTIVITY: &str = "activity-bar";
static CANVAS_ID_REVENUE: &str = "revenue-line";

fn base_chart(title: String) -> Chart {
  Chart::new()
  .title(
    Title::new()
    .text(title)
    .text_style(
      TextStyle::new()
      .color("rgba(255, 255, 255, 1)")
      .font_family("Arial")
      .font_size(16)
    )
    // top, right, bottom, left
    .padding((12, 0, 5, 20))
  )
  .background_color("rgba(41,52,65,1)")
  .grid(
    Grid::new()
    .left("8%")
    .top("20%")
    .bottom("10%")
    .right("6%")
    .contain_label(true)
  )
}

fn value_axis() -> Axis {
  Axis::new()
  .type_(AxisType::Value)
  .split_line(
    SplitLine::new()
    .line_style(
      LineStyle::new()
      .color("#737373")
    )
  )
  .axis_label(
    AxisLabel::new()
    .color("#cccccc")
  )
}

fn category_axis(labels: Vec<String>) -> Axis {
  Axis::new()
  .type_(AxisType::Category)
  .data(labels)
  .axis_label(
    AxisLabel::new()
    .color("#cccccc")
  )
}

fn render(renderer: &WasmRenderer, id: &str, chart: &Chart) -> Result<(), AppError> {
  renderer.render(id, chart).map_err(|e| AppError::ChartRenderError(format!("{}: {:?}", id, e)))
}

/// Script that resizes the chart in `id` with the window. One listener per
/// id: it looks the chart up on every resize, so remounts reuse it.
fn resize_script(id: &str) -> String {
  format!(
    r#"
      setTimeout(function() {{
        window.__chartResize = window.__chartResize || {{}};
        if (window.__chartResize['{id}']) {{ return; }}
        window.__chartResize['{id}'] = true;
        window.addEventListener('resize', function() {{
          const element = document.getElementById('{id}');
          if (!element) {{ return; }}
          const chart = echarts.getInstanceByDom(element);
          if (chart) {{ chart.resize(); }}
        }});
      }}, 150)
    "#
  )
}

fn resize_with_window(id: &'static str) {
  document::eval(&resize_script(id));
}

#[component]
pub fn ActivityChart(points: Vec<ActivityPoint>) -> Element {
  let renderer = use_signal(|| WasmRenderer::new_opt(None, Some(280)));
  let language = use_language();

  use_effect(use_reactive!(|points| {
    let lang = language();
    let days: Vec<String> = points.iter().map(|p| tr(lang, &p.day_key)).collect();
    let minutes: Vec<i64> = points.iter().map(|p| p.minutes as i64).collect();

    let chart = base_chart(tr(lang, "student.activity"))
    .color(vec![Color::Value("#87f7cf".to_string())])
    .tooltip(
      Tooltip::new()
      .trigger(Trigger::Axis)
    )
    .x_axis(category_axis(days))
    .y_axis(value_axis())
    .series(
      Bar::new()
      .name(tr(lang, "common.minutes"))
      .data(minutes)
    );

    if let Err(e) = render(&renderer.read_unchecked(), CANVAS_ID_ACTIVITY, &chart) {
      error!("{}", e);
    }
  }));

  rsx! {
    div {
      id: CANVAS_ID_ACTIVITY,
      class: "chart",
      onmounted: move |_evt| resize_with_window(CANVAS_ID_ACTIVITY)
    }
  }
}

#[component]
pub fn RevenueChart(points: Vec<RevenuePoint>) -> Element {
  let renderer = use_signal(|| WasmRenderer::new_opt(None, Some(300)));
  let language = use_language();

  use_effect(use_reactive!(|points| {
    let lang = language();
    let months: Vec<String> = points.iter().map(|p| p.month.clone()).collect();
    let amounts: Vec<f64> = points.iter().map(|p| p.amount.to_f64().unwrap_or(0.0)).collect();

    let chart = base_chart(tr(lang, "curator.revenue_chart"))
    .color(vec![Color::Value("#72ccff".to_string())])
    .tooltip(
      Tooltip::new()
      .trigger(Trigger::Axis)
    )
    .x_axis(category_axis(months))
    .y_axis(value_axis())
    .series(
      Line::new()
      .name(tr(lang, "stat.revenue"))
      .data(amounts)
    );

    if let Err(e) = render(&renderer.read_unchecked(), CANVAS_ID_REVENUE, &chart) {
      error!("{}", e);
    }
  }));

  rsx! {
    div {
      id: CANVAS_ID_REVENUE,
      class: "chart",
      onmounted: move |_evt| resize_with_window(CANVAS_ID_REVENUE)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resize_listener_is_registered_once_per_chart() {
    let script = resize_script(CANVAS_ID_REVENUE);
    assert_eq!(script.matches("addEventListener").count(), 1);
    assert!(script.contains("if (window.__chartResize['revenue-line']) { return; }"));
    assert!(script.contains("window.__chartResize['revenue-line'] = true;"));
    // the instance is looked up per event, not captured at mount
    let listener = script.split("addEventListener").nth(1).unwrap_or_default();
    assert!(listener.contains("getInstanceByDom"));
  }
}

// ladle-dashboard/examples/dashboard_tui.rs
// Read-mostly TUI over the restaurant management API.
//
// Usage:
//   LADLE_API_URL=http://localhost:5000/api \
//   LADLE_API_TOKEN=<jwt> \
//   LADLE_RESTAURANT_ID=<id> \
//   cargo run -p ladle-dashboard --example dashboard_tui
//
// Keys: Tab switch tab, n/p page, r refresh, q quit.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ladle_client::{ClientConfig, HttpClient};
use ladle_dashboard::Session;
use ladle_dashboard::managers::{CustomOrderManager, MenuManager, OrderManager, TableManager};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table as TableWidget, Tabs};
use shared::client::UserInfo;

const TABS: &[&str] = &["Tables", "Reservations", "Menu", "Custom Orders", "Orders"];

fn status_color(name: &str) -> Color {
    match name {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        _ => Color::DarkGray,
    }
}

struct App {
    tab: usize,
    tables: TableManager<HttpClient>,
    menu: MenuManager<HttpClient>,
    custom_orders: CustomOrderManager<HttpClient>,
    orders: OrderManager<HttpClient>,
    notices: Vec<String>,
}

impl App {
    fn new(transport: Arc<HttpClient>, session: Session) -> Self {
        Self {
            tab: 0,
            tables: TableManager::new(transport.clone(), session.clone()),
            menu: MenuManager::new(transport.clone(), session.clone()),
            custom_orders: CustomOrderManager::new(transport.clone(), session.clone()),
            orders: OrderManager::new(transport, session),
            notices: Vec::new(),
        }
    }

    async fn refresh(&mut self) {
        self.tables.refresh().await;
        self.menu.refresh().await;
        self.custom_orders.refresh().await;
        self.orders.refresh().await;
        self.collect_notices();
    }

    fn collect_notices(&mut self) {
        for notice in self
            .tables
            .drain_notices()
            .into_iter()
            .chain(self.menu.drain_notices())
            .chain(self.custom_orders.drain_notices())
            .chain(self.orders.drain_notices())
        {
            self.notices.push(notice.message);
        }
        let overflow = self.notices.len().saturating_sub(3);
        self.notices.drain(..overflow);
    }

    fn next_page(&mut self) {
        match self.tab {
            2 => {
                let len = self.menu.dishes.items().len();
                self.menu.pager.next_page(len);
            }
            3 => {
                let len = self.custom_orders.orders.items().len();
                self.custom_orders.pager.next_page(len);
            }
            4 => {
                let len = self.orders.orders.items().len();
                self.orders.pager.next_page(len);
            }
            _ => {}
        }
    }

    fn previous_page(&mut self) {
        match self.tab {
            2 => self.menu.pager.previous_page(),
            3 => self.custom_orders.pager.previous_page(),
            4 => self.orders.pager.previous_page(),
            _ => {}
        }
    }

    fn rows(&self) -> (Vec<Row<'static>>, [&'static str; 3]) {
        match self.tab {
            0 => (
                self.tables
                    .tables
                    .items()
                    .iter()
                    .map(|t| {
                        Row::new(vec![
                            format!("Table {}", t.table_number),
                            format!("{} seats", t.seating_capacity),
                            t.status.label().to_string(),
                        ])
                        .style(Style::default().fg(status_color(t.status.color())))
                    })
                    .collect(),
                ["Table", "Capacity", "Status"],
            ),
            1 => (
                self.tables
                    .reservations
                    .items()
                    .iter()
                    .map(|r| {
                        Row::new(vec![
                            r.customer_name.clone().unwrap_or_else(|| "Guest".into()),
                            r.reservation_time.format("%Y-%m-%d %H:%M").to_string(),
                            r.status.label().to_string(),
                        ])
                        .style(Style::default().fg(status_color(r.status.color())))
                    })
                    .collect(),
                ["Customer", "Time", "Status"],
            ),
            2 => (
                self.menu
                    .page()
                    .iter()
                    .map(|d| {
                        Row::new(vec![
                            d.name.clone(),
                            format!("${:.2}", d.price),
                            if d.is_available { "Available" } else { "Unavailable" }.to_string(),
                        ])
                    })
                    .collect(),
                ["Dish", "Price", "Availability"],
            ),
            3 => (
                self.custom_orders
                    .page()
                    .iter()
                    .map(|o| {
                        Row::new(vec![
                            o.dish_name.clone(),
                            o.price.map(|p| format!("${p:.2}")).unwrap_or_else(|| "-".into()),
                            o.status.label().to_string(),
                        ])
                        .style(Style::default().fg(status_color(o.status.color())))
                    })
                    .collect(),
                ["Request", "Price", "Status"],
            ),
            _ => (
                self.orders
                    .page()
                    .iter()
                    .map(|o| {
                        Row::new(vec![
                            o.id.clone(),
                            format!("${:.2}", o.total),
                            o.status.label().to_string(),
                        ])
                        .style(Style::default().fg(status_color(o.status.color())))
                    })
                    .collect(),
                ["Order", "Total", "Status"],
            ),
        }
    }

    fn auth_error(&self) -> Option<&'static str> {
        self.tables.auth_error()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();
    if config.token.is_none() {
        println!("Set LADLE_API_TOKEN (and LADLE_API_URL, LADLE_RESTAURANT_ID) first.");
        return Ok(());
    }
    let restaurant_id =
        std::env::var("LADLE_RESTAURANT_ID").unwrap_or_else(|_| "unknown".to_string());

    let token = config.token.clone().unwrap_or_default();
    let session = Session::new(
        token,
        UserInfo {
            id: "dashboard".into(),
            name: "Dashboard".into(),
            email: String::new(),
            role: "restaurant".into(),
            restaurant_id: Some(restaurant_id),
        },
    );

    let transport = Arc::new(config.build_http_client());
    let mut app = App::new(transport, session);
    app.refresh().await;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app).await;
    ratatui::restore();
    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let [tabs_area, body, footer] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(4),
            ])
            .areas(frame.area());

            let tabs = Tabs::new(TABS.iter().copied())
                .select(app.tab)
                .block(Block::default().borders(Borders::ALL).title("Ladle Dashboard"));
            frame.render_widget(tabs, tabs_area);

            if let Some(message) = app.auth_error() {
                frame.render_widget(
                    Paragraph::new(message)
                        .block(Block::default().borders(Borders::ALL)),
                    body,
                );
            } else {
                let (rows, header) = app.rows();
                let table = TableWidget::new(
                    rows,
                    [
                        Constraint::Percentage(40),
                        Constraint::Percentage(30),
                        Constraint::Percentage(30),
                    ],
                )
                .header(Row::new(header.to_vec()).style(Style::default().fg(Color::White)))
                .block(Block::default().borders(Borders::ALL).title(TABS[app.tab]));
                frame.render_widget(table, body);
            }

            let lines: Vec<Line> = app.notices.iter().map(|n| Line::raw(n.clone())).collect();
            frame.render_widget(
                Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL).title("Notices")),
                footer,
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Tab => app.tab = (app.tab + 1) % TABS.len(),
                    KeyCode::Char('n') => app.next_page(),
                    KeyCode::Char('p') => app.previous_page(),
                    KeyCode::Char('r') => app.refresh().await,
                    _ => {}
                }
            }
        }
        app.collect_notices();
    }
    Ok(())
}

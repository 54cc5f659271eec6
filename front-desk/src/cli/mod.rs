//! Interactive console loop
//!
//! Blocking line-oriented prompts over the application state. Every failure
//! prints a diagnostic and falls back to the menu; the loop only ends on
//! quit or end of input.

use crate::audit::AuditAction;
use crate::state::AppState;
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Run the menu loop until the user quits or stdin closes.
pub fn run(state: &mut AppState) -> io::Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Select an action: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => create_order(state)?,
            "2" => track_orders(state),
            "3" => {
                if let Some(actor) = access_gate(state)? {
                    edit_menu(state, &actor)?;
                }
            }
            "4" => {
                if let Some(actor) = access_gate(state)? {
                    edit_products(state, &actor)?;
                }
            }
            "5" => product_request(state)?,
            "6" => calculate_balance(state),
            "7" => {
                if let Some(actor) = access_gate(state)? {
                    register_employee(state, &actor)?;
                }
            }
            "8" => {
                if let Some(actor) = access_gate(state)? {
                    edit_employee_account(state, &actor)?;
                }
            }
            "0" => {
                println!("Goodbye!");
                break;
            }
            "" => {}
            other => println!("Invalid choice: {other}"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("1. Create an order");
    println!("2. Track order status");
    println!("3. Edit the menu (administrator)");
    println!("4. Edit the product list (administrator)");
    println!("5. Create a product request (stock desk)");
    println!("6. Calculate the balance (accountant)");
    println!("7. Register an employee (administrator)");
    println!("8. Edit an employee account (administrator)");
    println!("0. Quit");
}

/// Read one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Username/password gate in front of the administrator actions. Returns
/// the authenticated username.
fn access_gate(state: &mut AppState) -> io::Result<Option<String>> {
    let Some(username) = prompt("Username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt("Password: ")? else {
        return Ok(None);
    };

    if state.accounts.authenticate(&username, &password) {
        state.audit.record(&username, AuditAction::LoginSuccess, "access gate passed");
        Ok(Some(username))
    } else {
        state.audit.record(&username, AuditAction::LoginFailed, "access gate denied");
        println!("Invalid username or password.");
        Ok(None)
    }
}

fn create_order(state: &mut AppState) -> io::Result<()> {
    if state.catalog.menu().is_empty() {
        println!("The menu is empty; nothing to order.");
        return Ok(());
    }

    println!("Available dishes:");
    for item in state.catalog.menu().values() {
        println!("  {} - {}", item.name, item.price);
    }

    let mut items = Vec::new();
    loop {
        let Some(name) = prompt("Dish name (0 to finish): ")? else {
            return Ok(());
        };
        if name == "0" {
            break;
        }
        match state.catalog.menu_item(&name) {
            Some(item) => items.push(item.clone()),
            None => println!("No dish named {name:?} on the menu."),
        }
    }

    let order = state.guest.create_order(items);
    let summary = format!("{} item(s), total {}", order.items().len(), order.subtotal());
    println!("Order created: {summary}.");
    let actor = state.guest.name().to_string();
    state.audit.record(&actor, AuditAction::OrderCreated, summary);
    Ok(())
}

fn track_orders(state: &AppState) {
    if state.guest.orders().is_empty() {
        println!("No orders yet.");
        return;
    }
    println!("Order status:");
    for (index, order) in state.guest.orders().iter().enumerate() {
        println!("Order #{}:", index + 1);
        for flag in order.status_flags() {
            println!("  - {}", flag.describe());
        }
    }
}

fn edit_menu(state: &mut AppState, actor: &str) -> io::Result<()> {
    let Some(name) = prompt("Dish name: ")? else {
        return Ok(());
    };
    let Some(ingredients) = prompt("Ingredients: ")? else {
        return Ok(());
    };
    let Some(raw_price) = prompt("Price: ")? else {
        return Ok(());
    };
    let Ok(price) = raw_price.parse::<Decimal>() else {
        println!("Not a valid price: {raw_price}");
        return Ok(());
    };
    let Some(raw_minutes) = prompt("Preparation time (minutes): ")? else {
        return Ok(());
    };
    let Ok(prep_minutes) = raw_minutes.parse::<u32>() else {
        println!("Not a valid preparation time: {raw_minutes}");
        return Ok(());
    };

    let item = shared::models::MenuItem::new(name.clone(), ingredients, price, prep_minutes);
    match state.upsert_menu_item(item) {
        Ok(Some(_)) => println!("Dish {name:?} replaced."),
        Ok(None) => println!("Dish {name:?} added."),
        Err(e) => {
            println!("Failed to save the menu: {e}");
            return Ok(());
        }
    }
    state.audit.record(actor, AuditAction::MenuEdited, name);
    Ok(())
}

fn edit_products(state: &mut AppState, actor: &str) -> io::Result<()> {
    let Some(id) = prompt("Product id: ")? else {
        return Ok(());
    };
    let Some(name) = prompt("Product name: ")? else {
        return Ok(());
    };
    let Some(raw_cost) = prompt("Cost: ")? else {
        return Ok(());
    };
    let Ok(cost) = raw_cost.parse::<Decimal>() else {
        println!("Not a valid cost: {raw_cost}");
        return Ok(());
    };

    match state.add_product(shared::models::Product::new(id.clone(), name, cost)) {
        Ok(()) => {
            println!("Product {id} added.");
            state.audit.record(actor, AuditAction::ProductAdded, id);
        }
        Err(e) => println!("Failed to add the product: {e}"),
    }
    Ok(())
}

fn product_request(state: &mut AppState) -> io::Result<()> {
    if state.catalog.products().is_empty() {
        println!("The product list is empty.");
        return Ok(());
    }

    println!("Available products:");
    for product in state.catalog.products() {
        println!("  {} - {} ({})", product.id, product.name, product.cost);
    }

    let Some(id) = prompt("Product id: ")? else {
        return Ok(());
    };
    let Some(raw_quantity) = prompt("Quantity: ")? else {
        return Ok(());
    };
    let Ok(quantity) = raw_quantity.parse::<u32>() else {
        println!("Not a valid quantity: {raw_quantity}");
        return Ok(());
    };

    match state.request_products(&id, quantity) {
        Ok(request) => {
            println!(
                "Product request created: {} x {} for {}.",
                request.quantity, request.product_name, request.total_cost
            );
            state.audit.record(
                "stock desk",
                AuditAction::PurchaseRequested,
                format!("{} x {}", request.quantity, request.product_id),
            );
        }
        Err(e) => println!("Product request failed: {e}"),
    }
    Ok(())
}

fn calculate_balance(state: &mut AppState) {
    let balance = state.compute_balance();
    println!("Restaurant balance: {balance}");
    state
        .audit
        .record("accountant", AuditAction::BalanceComputed, balance.to_string());
}

fn register_employee(state: &mut AppState, actor: &str) -> io::Result<()> {
    let Some(username) = prompt("New username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt("Password: ")? else {
        return Ok(());
    };

    match state.register_employee(&username, &password) {
        Ok(()) => {
            println!("Registration complete.");
            state.audit.record(actor, AuditAction::EmployeeRegistered, username);
        }
        Err(e) => println!("Registration failed: {e}"),
    }
    Ok(())
}

fn edit_employee_account(state: &mut AppState, actor: &str) -> io::Result<()> {
    let Some(username) = prompt("Username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt("New password: ")? else {
        return Ok(());
    };

    match state.edit_employee_account(&username, &password) {
        Ok(()) => {
            println!("Account updated.");
            state
                .audit
                .record(actor, AuditAction::EmployeeAccountEdited, username);
        }
        Err(e) => println!("Account edit failed: {e}"),
    }
    Ok(())
}

use shared::{money, store::AccountStore, AccountType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// A deposit or withdrawal submission with the amount still as typed.
#[derive(Clone, PartialEq)]
pub struct TransactionRequest {
    pub account_id: String,
    pub amount: String,
}

#[derive(Clone, PartialEq)]
pub struct TransferRequest {
    pub account_id: String,
    pub destination: String,
    pub amount: String,
}

#[derive(Clone, PartialEq)]
pub struct OpenAccountRequest {
    pub account_type: AccountType,
    pub initial_deposit: String,
}

/// Store state plus mutation callbacks, passed down into the dashboard and
/// accounts page. Errors from rejected submissions land in `form_error`;
/// confirmations land in `form_success` and clear themselves after 3s.
#[derive(Clone, PartialEq)]
pub struct StoreHandle {
    pub store: AccountStore,
    pub form_error: Option<String>,
    pub form_success: Option<String>,
    pub deposit: Callback<TransactionRequest>,
    pub withdraw: Callback<TransactionRequest>,
    pub transfer: Callback<TransferRequest>,
    pub open_account: Callback<OpenAccountRequest>,
    pub close_account: Callback<String>,
    pub clear_messages: Callback<()>,
}

#[hook]
pub fn use_store() -> StoreHandle {
    let store = use_state(AccountStore::seeded);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);

    // Apply a mutation to a working copy; only a successful one replaces the
    // state, so rejected submissions leave the store untouched.
    fn run_mutation(
        store: &UseStateHandle<AccountStore>,
        form_error: &UseStateHandle<Option<String>>,
        form_success: &UseStateHandle<Option<String>>,
        mutation: impl FnOnce(&mut AccountStore) -> Result<String, String>,
    ) {
        form_error.set(None);
        let mut working = (**store).clone();
        match mutation(&mut working) {
            Ok(message) => {
                store.set(working);
                form_success.set(Some(message));

                let form_success = form_success.clone();
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(3000).await;
                    form_success.set(None);
                });
            }
            Err(message) => {
                gloo::console::error!("Rejected submission:", message.clone());
                form_error.set(Some(message));
            }
        }
    }

    let deposit = {
        let store = store.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |request: TransactionRequest, _| {
            run_mutation(&store, &form_error, &form_success, |working| {
                let amount = money::parse_amount(&request.amount).map_err(|e| e.to_string())?;
                working
                    .deposit(&request.account_id, amount)
                    .map(|t| format!("Deposited {}", money::format_usd(t.amount)))
                    .map_err(|e| e.to_string())
            });
        })
    };

    let withdraw = {
        let store = store.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |request: TransactionRequest, _| {
            run_mutation(&store, &form_error, &form_success, |working| {
                let amount = money::parse_amount(&request.amount).map_err(|e| e.to_string())?;
                working
                    .withdraw(&request.account_id, amount)
                    .map(|t| format!("Withdrew {}", money::format_usd(t.amount)))
                    .map_err(|e| e.to_string())
            });
        })
    };

    let transfer = {
        let store = store.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |request: TransferRequest, _| {
            run_mutation(&store, &form_error, &form_success, |working| {
                let amount = money::parse_amount(&request.amount).map_err(|e| e.to_string())?;
                working
                    .transfer(&request.account_id, &request.destination, amount)
                    .map(|t| {
                        format!(
                            "Transferred {} to {}",
                            money::format_usd(t.amount),
                            request.destination
                        )
                    })
                    .map_err(|e| e.to_string())
            });
        })
    };

    let open_account = {
        let store = store.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |request: OpenAccountRequest, _| {
            run_mutation(&store, &form_error, &form_success, |working| {
                let deposit =
                    money::parse_amount(&request.initial_deposit).map_err(|e| e.to_string())?;
                working
                    .open_account(request.account_type, deposit)
                    .map(|account| format!("Opened {}", account.account_type.label()))
                    .map_err(|e| e.to_string())
            });
        })
    };

    let close_account = {
        let store = store.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |account_id: String, _| {
            run_mutation(&store, &form_error, &form_success, |working| {
                working
                    .close_account(&account_id)
                    .map(|_| "Account closed".to_string())
                    .map_err(|e| e.to_string())
            });
        })
    };

    let clear_messages = {
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |_: (), _| {
            form_error.set(None);
            form_success.set(None);
        })
    };

    StoreHandle {
        store: (*store).clone(),
        form_error: (*form_error).clone(),
        form_success: (*form_success).clone(),
        deposit,
        withdraw,
        transfer,
        open_account,
        close_account,
        clear_messages,
    }
}

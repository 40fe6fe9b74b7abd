// src/models/order.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- ENUMS ---

// As oito etapas do quadro Kanban, na ordem de exibição.
// O setter de status é propositalmente livre: qualquer etapa é alcançável
// a partir de qualquer outra, para permitir corrigir lançamentos errados.
// Mapeia o CREATE TYPE order_status do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Recebido,
    EmAnalise,
    AguardandoAprovacao,
    AguardandoPecas,
    EmManutencao,
    EmTestes,
    ProntoEntrega,
    Finalizado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Recebido,
        OrderStatus::EmAnalise,
        OrderStatus::AguardandoAprovacao,
        OrderStatus::AguardandoPecas,
        OrderStatus::EmManutencao,
        OrderStatus::EmTestes,
        OrderStatus::ProntoEntrega,
        OrderStatus::Finalizado,
    ];

    // Valida o fluxo de status do Kanban.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "recebido" => Some(OrderStatus::Recebido),
            "em-analise" => Some(OrderStatus::EmAnalise),
            "aguardando-aprovacao" => Some(OrderStatus::AguardandoAprovacao),
            "aguardando-pecas" => Some(OrderStatus::AguardandoPecas),
            "em-manutencao" => Some(OrderStatus::EmManutencao),
            "em-testes" => Some(OrderStatus::EmTestes),
            "pronto-entrega" => Some(OrderStatus::ProntoEntrega),
            "finalizado" => Some(OrderStatus::Finalizado),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Recebido => "recebido",
            OrderStatus::EmAnalise => "em-analise",
            OrderStatus::AguardandoAprovacao => "aguardando-aprovacao",
            OrderStatus::AguardandoPecas => "aguardando-pecas",
            OrderStatus::EmManutencao => "em-manutencao",
            OrderStatus::EmTestes => "em-testes",
            OrderStatus::ProntoEntrega => "pronto-entrega",
            OrderStatus::Finalizado => "finalizado",
        }
    }
}

// Classe de serviço: controla a ordem de listagem das OS.
// Mapeia o CREATE TYPE service_class do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_class", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ServiceClass {
    Urgente,
    DataFixa,
    Comum,
}

impl ServiceClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "urgente" => Some(ServiceClass::Urgente),
            "data-fixa" => Some(ServiceClass::DataFixa),
            "comum" => Some(ServiceClass::Comum),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceClass::Urgente => "urgente",
            ServiceClass::DataFixa => "data-fixa",
            ServiceClass::Comum => "comum",
        }
    }

    // Chave de prioridade: urgente antes de data-fixa antes de comum.
    pub fn priority(self) -> u8 {
        match self {
            ServiceClass::Urgente => 1,
            ServiceClass::DataFixa => 2,
            ServiceClass::Comum => 3,
        }
    }
}

// --- REGISTROS ---

// A OS como fica no armazenamento.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: i64,
    pub client_id: i64,
    pub product: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub service_class: ServiceClass,
    pub observation: String,
    pub active: bool,
}

// Visão desnormalizada para o frontend: a OS com o nome do cliente
// resolvido. Nas listagens a semântica é de inner join (cliente inativo
// ou ausente exclui a OS); na leitura individual o nome pode vir nulo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub product: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub service_class: ServiceClass,
    pub observation: String,
}

// Campos de uma OS nova, já com os padrões aplicados pelo service.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client_id: i64,
    pub product: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub service_class: ServiceClass,
    pub observation: String,
}

// Atualização com lista explícita de campos. `id`, `date` e o vínculo
// com o cliente são gerenciados pelo servidor e não aparecem aqui.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub product: Option<String>,
    pub description: Option<String>,
    pub status: Option<OrderStatus>,
    pub service_class: Option<ServiceClass>,
    pub observation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aceita_as_oito_etapas() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejeita_etapa_desconhecida() {
        assert_eq!(OrderStatus::parse("cancelado"), None);
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("Recebido"), None);
    }

    #[test]
    fn prioridade_ordena_urgente_antes_de_data_fixa_antes_de_comum() {
        assert!(ServiceClass::Urgente.priority() < ServiceClass::DataFixa.priority());
        assert!(ServiceClass::DataFixa.priority() < ServiceClass::Comum.priority());
    }

    #[test]
    fn parse_das_classes_de_servico() {
        assert_eq!(ServiceClass::parse("urgente"), Some(ServiceClass::Urgente));
        assert_eq!(ServiceClass::parse("data-fixa"), Some(ServiceClass::DataFixa));
        assert_eq!(ServiceClass::parse("comum"), Some(ServiceClass::Comum));
        assert_eq!(ServiceClass::parse("critica"), None);
    }

    // Os enums precisam apontar para os tipos criados nas migrações;
    // um nome divergente faria o sqlx falhar ao preparar os statements.
    #[test]
    fn tipo_postgres_dos_enums_corresponde_as_migracoes() {
        use sqlx::{Postgres, Type, TypeInfo};

        assert_eq!(
            <OrderStatus as Type<Postgres>>::type_info().name(),
            "order_status"
        );
        assert_eq!(
            <ServiceClass as Type<Postgres>>::type_info().name(),
            "service_class"
        );
    }
}

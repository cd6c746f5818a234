//! Seed knowledge base used when no store exists yet

use crate::types::{EntryId, KnowledgeEntry};

const SEED: &[(&str, &str, &str, &str)] = &[
    (
        "faq-1",
        "Quando começam as aulas?",
        "O calendário acadêmico com todas as datas importantes, incluindo o início das aulas, está disponível no Portal do Aluno.",
        "Matrícula e Rematrícula",
    ),
    (
        "faq-2",
        "Como faço minha rematrícula?",
        "A rematrícula é feita online através do Portal do Aluno durante o período definido no calendário acadêmico. Fique atento aos prazos!",
        "Matrícula e Rematrícula",
    ),
    (
        "faq-3",
        "Perdi o prazo de matrícula, e agora?",
        "Caso tenha perdido o prazo, você deve procurar a secretaria acadêmica do seu curso para verificar a possibilidade de matrícula em disciplinas com vagas remanescentes.",
        "Matrícula e Rematrícula",
    ),
    (
        "faq-4",
        "Onde pego a segunda via do meu boleto?",
        "A segunda via do boleto da mensalidade pode ser gerada a qualquer momento na seção \"Financeiro\" do Portal do Aluno.",
        "Financeiro",
    ),
    (
        "faq-5",
        "Como funcionam as bolsas de estudo?",
        "A universidade oferece diversas modalidades de bolsas. Para mais informações sobre critérios e processos de seleção, acesse a página de bolsas no site da universidade ou contate o setor de assistência estudantil.",
        "Financeiro",
    ),
    (
        "faq-6",
        "Posso pagar a mensalidade com cartão de crédito?",
        "Sim, o pagamento via cartão de crédito é aceito através do Portal do Aluno, na seção \"Financeiro\".",
        "Financeiro",
    ),
    (
        "faq-7",
        "Onde consulto meus horários de aula?",
        "Seus horários, disciplinas e salas de aula estão sempre atualizados no Portal do Aluno.",
        "Grade de Horários",
    ),
    (
        "faq-8",
        "A sala da minha aula mudou, como serei avisado?",
        "Qualquer alteração de sala ou horário é comunicada por e-mail e também atualizada no Portal do Aluno. Verifique sempre antes de ir para a aula.",
        "Grade de Horários",
    ),
    (
        "faq-9",
        "Esqueci minha senha do Portal do Aluno, como recupero?",
        "Na tela de login do Portal do Aluno, clique em \"Esqueci minha senha\" e siga as instruções para criar uma nova senha através do seu e-mail cadastrado.",
        "Portal do Aluno",
    ),
    (
        "faq-10",
        "Como acesso o Wi-Fi da universidade?",
        "Para acessar a rede Wi-Fi, utilize seu RA como login e a mesma senha do Portal do Aluno.",
        "Portal do Aluno",
    ),
    (
        "faq-11",
        "Qual o horário de funcionamento da biblioteca?",
        "A biblioteca central funciona de segunda a sexta, das 8h às 22h, e aos sábados, das 9h às 14h.",
        "Campus",
    ),
    (
        "faq-12",
        "Como faço a carteirinha de estudante?",
        "A solicitação da carteirinha de estudante é feita no início do semestre na secretaria acadêmica. Fique de olho nos avisos!",
        "Campus",
    ),
    (
        "faq-13",
        "Quando acontece a semana de recepção de calouros?",
        "A semana de recepção de calouros acontece sempre na primeira semana de aulas do primeiro semestre. A programação completa é divulgada no site e nas redes sociais da universidade.",
        "Eventos",
    ),
];

/// University FAQ set a fresh store starts from
pub fn default_entries() -> Vec<KnowledgeEntry> {
    SEED.iter()
        .map(|(id, question, answer, category)| KnowledgeEntry {
            id: EntryId::from(*id),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::ensure_unique_ids;

    #[test]
    fn test_seed_is_consistent() {
        let entries = default_entries();
        assert_eq!(entries.len(), 13);
        assert!(ensure_unique_ids(&entries).is_ok());
        assert_eq!(entries[0].question, "Quando começam as aulas?");
    }
}
